//! Deep links into the Denmoku reservation app.
//!
//! [`VerifiedUrl`] is the only URL type the song rows render as a link, and it
//! can only be built here, from fixed templates plus a request number that has
//! been checked to contain nothing but digits and hyphens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const DENMOKU_SCHEME: &str = "denmoku";
const DENMOKU_ANDROID_PACKAGE: &str = "jp.co.dkkaraoke.denmokumini01";
const CLUBDAM_SONG_PAGE: &str = "https://www.clubdam.com/karaokesearch/songleaf.html";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Song has no DAM request number")]
    MissingRequestNo,
    #[error("Invalid DAM request number: {0:?}")]
    InvalidRequestNo(String),
}

/// Runtime platform the reserve link is opened on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Platform {
    Ios,
    Android,
    #[default]
    Other,
}

impl Platform {
    /// Best-effort classification of a browser user-agent string.
    pub fn from_user_agent(user_agent: &str) -> Self {
        let user_agent = user_agent.to_ascii_lowercase();
        if ["iphone", "ipad", "ipod"]
            .iter()
            .any(|device| user_agent.contains(device))
        {
            Self::Ios
        } else if user_agent.contains("android") {
            Self::Android
        } else {
            Self::Other
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn detect() -> Self {
        let user_agent = web_sys::window()
            .and_then(|window| window.navigator().user_agent().ok())
            .unwrap_or_default();
        let platform = Self::from_user_agent(&user_agent);
        tracing::debug!(?platform, %user_agent, "detected platform");
        platform
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn detect() -> Self {
        if cfg!(target_os = "ios") {
            Self::Ios
        } else if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Other
        }
    }
}

/// Which link template set to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LinkMode {
    /// iOS scheme, Android intent or the clubDAM web page.
    #[default]
    PlatformAware,
    /// Always the `denmoku://` scheme, whatever the platform.
    NativeSchemeOnly,
}

impl FromStr for LinkMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "platform-aware" | "platform" => Ok(Self::PlatformAware),
            "native-scheme-only" | "native" => Ok(Self::NativeSchemeOnly),
            other => Err(format!("unknown link mode: {other}")),
        }
    }
}

/// What a [`VerifiedUrl`] opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    DenmokuScheme,
    AndroidIntent,
    WebPage,
}

/// A URL built by this module and safe to render as a link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedUrl {
    href: String,
    target: LinkTarget,
}

impl VerifiedUrl {
    fn new(href: String, target: LinkTarget) -> Self {
        Self { href, target }
    }

    pub fn as_str(&self) -> &str {
        &self.href
    }

    pub fn target(&self) -> LinkTarget {
        self.target
    }

    /// Links that leave the page for another app.
    pub fn opens_app(&self) -> bool {
        self.target != LinkTarget::WebPage
    }
}

impl fmt::Display for VerifiedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks a DAM request number and returns it with the hyphens removed.
fn normalize_request_no(request_no: &str) -> Result<String, ReservationError> {
    if request_no.is_empty() {
        return Err(ReservationError::MissingRequestNo);
    }
    let valid = request_no.chars().all(|ch| ch.is_ascii_digit() || ch == '-')
        && request_no.chars().any(|ch| ch.is_ascii_digit());
    if !valid {
        return Err(ReservationError::InvalidRequestNo(request_no.to_string()));
    }
    Ok(request_no.replace('-', ""))
}

/// Builds the link that reserves `request_no` in Denmoku on `platform`.
///
/// The web fallback keeps the hyphenated request number; the app links use
/// the digits only.
pub fn build_reservation_url(
    request_no: &str,
    platform: Platform,
) -> Result<VerifiedUrl, ReservationError> {
    let request_no = request_no.trim();
    let reqno = normalize_request_no(request_no)?;

    let url = match platform {
        Platform::Ios => VerifiedUrl::new(
            format!("{DENMOKU_SCHEME}://reserve?reqno={reqno}"),
            LinkTarget::DenmokuScheme,
        ),
        Platform::Android => VerifiedUrl::new(
            format!(
                "intent://reserve/?reqno={reqno}#Intent;scheme={DENMOKU_SCHEME};package={DENMOKU_ANDROID_PACKAGE};end;"
            ),
            LinkTarget::AndroidIntent,
        ),
        Platform::Other => VerifiedUrl::new(
            format!(
                "{CLUBDAM_SONG_PAGE}?requestNo={}",
                urlencoding::encode(request_no)
            ),
            LinkTarget::WebPage,
        ),
    };
    Ok(url)
}

/// [`build_reservation_url`] honoring the configured [`LinkMode`].
pub fn reservation_url_for(
    request_no: &str,
    platform: Platform,
    mode: LinkMode,
) -> Result<VerifiedUrl, ReservationError> {
    match mode {
        LinkMode::PlatformAware => build_reservation_url(request_no, platform),
        LinkMode::NativeSchemeOnly => build_reservation_url(request_no, Platform::Ios),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Platform::Ios, "denmoku://reserve?reqno=1234567890", LinkTarget::DenmokuScheme)]
    #[case(
        Platform::Android,
        "intent://reserve/?reqno=1234567890#Intent;scheme=denmoku;package=jp.co.dkkaraoke.denmokumini01;end;",
        LinkTarget::AndroidIntent
    )]
    #[case(
        Platform::Other,
        "https://www.clubdam.com/karaokesearch/songleaf.html?requestNo=1234-5678-90",
        LinkTarget::WebPage
    )]
    fn builds_platform_links(
        #[case] platform: Platform,
        #[case] expected: &str,
        #[case] target: LinkTarget,
    ) {
        let url = build_reservation_url("1234-5678-90", platform).unwrap();
        assert_eq!(url.as_str(), expected);
        assert_eq!(url.target(), target);
    }

    #[rstest]
    #[case(Platform::Ios)]
    #[case(Platform::Android)]
    #[case(Platform::Other)]
    fn native_scheme_only_ignores_platform(#[case] platform: Platform) {
        let url = reservation_url_for("1234-5678-90", platform, LinkMode::NativeSchemeOnly).unwrap();
        assert_eq!(url.as_str(), "denmoku://reserve?reqno=1234567890");
        assert!(url.opens_app());
    }

    #[test]
    fn platform_aware_mode_matches_builder() {
        let url = reservation_url_for("5555-01", Platform::Android, LinkMode::PlatformAware).unwrap();
        assert_eq!(url, build_reservation_url("5555-01", Platform::Android).unwrap());
    }

    #[rstest]
    #[case("", ReservationError::MissingRequestNo)]
    #[case("   ", ReservationError::MissingRequestNo)]
    #[case("---", ReservationError::InvalidRequestNo("---".into()))]
    #[case("1234&x=1", ReservationError::InvalidRequestNo("1234&x=1".into()))]
    #[case("javascript:alert(1)", ReservationError::InvalidRequestNo("javascript:alert(1)".into()))]
    #[case("12 34", ReservationError::InvalidRequestNo("12 34".into()))]
    fn rejects_anything_but_digits_and_hyphens(
        #[case] request_no: &str,
        #[case] expected: ReservationError,
    ) {
        for platform in [Platform::Ios, Platform::Android, Platform::Other] {
            assert_eq!(build_reservation_url(request_no, platform), Err(expected.clone()));
        }
    }

    #[rstest]
    #[case("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", Platform::Ios)]
    #[case("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)", Platform::Ios)]
    #[case("Mozilla/5.0 (Linux; Android 14; Pixel 8)", Platform::Android)]
    #[case("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", Platform::Other)]
    #[case("", Platform::Other)]
    fn classifies_user_agents(#[case] user_agent: &str, #[case] expected: Platform) {
        assert_eq!(Platform::from_user_agent(user_agent), expected);
    }

    #[test]
    fn link_mode_parses_short_names() {
        assert_eq!("native".parse::<LinkMode>(), Ok(LinkMode::NativeSchemeOnly));
        assert_eq!("platform-aware".parse::<LinkMode>(), Ok(LinkMode::PlatformAware));
        assert!("ios".parse::<LinkMode>().is_err());
    }
}
