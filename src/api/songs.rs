use crate::api::error::SongServiceError;
use crate::api::models::Song;
use crate::config::AppConfig;
use crate::diagnostics::log_perf;
use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, warn};

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// The remote song search service.
///
/// "No results" is an empty list, never an error.
#[allow(async_fn_in_trait)]
pub trait SongSearchService {
    async fn by_keyword(&self, keyword: &str) -> Result<Vec<Song>, SongServiceError>;
    async fn by_song_name(&self, song_name: &str) -> Result<Vec<Song>, SongServiceError>;
    async fn by_brand_name(&self, brand_name: &str) -> Result<Vec<Song>, SongServiceError>;
    async fn by_live_event_id(&self, live_event_id: u64) -> Result<Vec<Song>, SongServiceError>;
}

/// HTTP client for the song search service.
#[derive(Debug, Clone, PartialEq)]
pub struct SongsClient {
    base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Duration,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SongListBody {
    List(Vec<Song>),
    Wrapped { songs: Vec<Song> },
}

impl SongsClient {
    pub fn new(config: &AppConfig) -> Result<Self, SongServiceError> {
        let base_url = config.api_base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SongServiceError::InvalidBaseUrl(config.api_base_url.clone()));
        }

        Ok(Self {
            base_url,
            #[cfg(not(target_arch = "wasm32"))]
            timeout: Duration::from_secs(config.request_timeout_secs as u64),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!("{}/{}", self.base_url, path);

        for (index, (key, value)) in params.iter().enumerate() {
            let separator = if index == 0 { '?' } else { '&' };
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
        }

        url
    }

    async fn fetch_songs(&self, url: String) -> Result<Vec<Song>, SongServiceError> {
        let started_at = Utc::now();
        let request = HTTP_CLIENT.get(&url);
        #[cfg(not(target_arch = "wasm32"))]
        let request = request.timeout(self.timeout);

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            debug!(%url, "song service has no results");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), "song service request failed");
            return Err(SongServiceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let songs = parse_song_list(&body)?;
        log_perf(
            "songs.fetch",
            started_at,
            &format!("{} songs from {url}", songs.len()),
        );
        Ok(songs)
    }
}

/// Accepts either a bare JSON array or `{ "songs": [...] }`.
pub fn parse_song_list(body: &str) -> Result<Vec<Song>, SongServiceError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<SongListBody>(body) {
        Ok(SongListBody::List(songs)) | Ok(SongListBody::Wrapped { songs }) => Ok(songs),
        Err(err) => Err(SongServiceError::Decode(err.to_string())),
    }
}

impl SongSearchService for SongsClient {
    async fn by_keyword(&self, keyword: &str) -> Result<Vec<Song>, SongServiceError> {
        let url = self.build_url("songs", &[("keyword", keyword)]);
        self.fetch_songs(url).await
    }

    async fn by_song_name(&self, song_name: &str) -> Result<Vec<Song>, SongServiceError> {
        let url = self.build_url("songs", &[("songName", song_name)]);
        self.fetch_songs(url).await
    }

    async fn by_brand_name(&self, brand_name: &str) -> Result<Vec<Song>, SongServiceError> {
        let url = self.build_url("songs", &[("brandName", brand_name)]);
        self.fetch_songs(url).await
    }

    async fn by_live_event_id(&self, live_event_id: u64) -> Result<Vec<Song>, SongServiceError> {
        let url = self.build_url(&format!("live-events/{live_event_id}/songs"), &[]);
        self.fetch_songs(url).await
    }
}
