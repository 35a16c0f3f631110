use crate::api::SortType;
use crate::reservation::LinkMode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "denmoku-songs.config";

const DEFAULT_API_BASE_URL: &str = match option_env!("SONGS_API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Song service URL must start with http:// or https://, got {0:?}")]
    InvalidBaseUrl(String),
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Settings for the song list app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    #[serde(default)]
    pub default_sort: SortType,
    #[serde(default)]
    pub link_mode: LinkMode,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u32,
}

fn default_request_timeout_secs() -> u32 {
    20
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            default_sort: SortType::default(),
            link_mode: LinkMode::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl AppConfig {
    /// Trims the base URL and clamps the timeout; rejects non-HTTP base URLs.
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let url = self.api_base_url.trim().trim_end_matches('/').to_string();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(self.api_base_url));
        }
        self.api_base_url = url;
        self.request_timeout_secs = self.request_timeout_secs.clamp(1, 120);
        Ok(self)
    }

    /// Applies `SONGS_*` overrides from `lookup` on top of `self`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SONGS_API_BASE_URL") {
            self.api_base_url = url;
        }
        if let Some(sort) = lookup("SONGS_DEFAULT_SORT") {
            self.default_sort = sort.parse().map_err(|message| ConfigError::InvalidValue {
                key: "SONGS_DEFAULT_SORT",
                message,
            })?;
        }
        if let Some(mode) = lookup("SONGS_LINK_MODE") {
            self.link_mode = mode.parse().map_err(|message| ConfigError::InvalidValue {
                key: "SONGS_LINK_MODE",
                message,
            })?;
        }
        if let Some(timeout) = lookup("SONGS_REQUEST_TIMEOUT_SECS") {
            self.request_timeout_secs =
                timeout
                    .trim()
                    .parse()
                    .map_err(|err: std::num::ParseIntError| ConfigError::InvalidValue {
                        key: "SONGS_REQUEST_TIMEOUT_SECS",
                        message: err.to_string(),
                    })?;
        }
        self.validated()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::default().with_overrides(|key| std::env::var(key).ok())
}

#[cfg(target_arch = "wasm32")]
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let stored = LocalStorage::get::<AppConfig>(CONFIG_KEY).unwrap_or_default();
    stored.validated()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_config(_config: &AppConfig) -> Result<(), ConfigError> {
    // Native builds are configured through the environment.
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    LocalStorage::set(CONFIG_KEY, config).map_err(|err| ConfigError::Storage(err.to_string()))
}

/// Loads the config, falling back to defaults when it is unusable.
pub fn load_config_or_default() -> AppConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("falling back to default config: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn overrides_apply_and_validate() {
        let config = AppConfig::default()
            .with_overrides(lookup(&[
                ("SONGS_API_BASE_URL", " https://songs.example.com/api/ "),
                ("SONGS_DEFAULT_SORT", "newer"),
                ("SONGS_LINK_MODE", "native"),
                ("SONGS_REQUEST_TIMEOUT_SECS", "900"),
            ]))
            .unwrap();

        assert_eq!(
            config,
            AppConfig {
                api_base_url: "https://songs.example.com/api".to_string(),
                default_sort: SortType::Newer,
                link_mode: LinkMode::NativeSchemeOnly,
                request_timeout_secs: 120,
            }
        );
    }

    #[test]
    fn no_overrides_keeps_defaults() {
        let config = AppConfig::default().with_overrides(lookup(&[])).unwrap();
        assert_eq!(config.default_sort, SortType::Popular);
        assert_eq!(config.link_mode, LinkMode::PlatformAware);
        assert_eq!(config.request_timeout_secs, 20);
    }

    #[test]
    fn bad_values_are_reported() {
        let err = AppConfig::default()
            .with_overrides(lookup(&[("SONGS_DEFAULT_SORT", "shuffle")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "SONGS_DEFAULT_SORT", .. }));

        let err = AppConfig::default()
            .with_overrides(lookup(&[("SONGS_API_BASE_URL", "ftp://songs")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidBaseUrl("ftp://songs".to_string()));
    }

    #[test]
    fn stored_config_fills_missing_fields() {
        let config: AppConfig =
            serde_json::from_str(r#"{"api_base_url":"https://songs.example.com"}"#).unwrap();
        assert_eq!(config.default_sort, SortType::Popular);
        assert_eq!(config.request_timeout_secs, 20);
        assert_eq!(config.link_mode, LinkMode::PlatformAware);
    }
}
