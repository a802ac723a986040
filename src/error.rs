//! Fetch failure causes
//!
//! These never reach the screen. The App layer collapses every variant into
//! the fixed message in [`crate::constants::FETCH_ERROR_MESSAGE`]; the
//! variant only shows up in the log.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid user payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Request(e) if e.is_timeout() => "timeout",
            FetchError::Request(e) if e.is_connect() => "connect",
            FetchError::Request(_) => "request",
            FetchError::Status(_) => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
