use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SongServiceError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Song service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("Could not read song list: {0}")]
    Decode(String),
    #[error("Invalid song service URL: {0}")]
    InvalidBaseUrl(String),
}

impl From<reqwest::Error> for SongServiceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}
