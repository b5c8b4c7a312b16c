//! Error types for the YouTube Data API client.

use thiserror::Error;

/// Errors that can occur when talking to the YouTube Data API.
#[derive(Error, Debug)]
pub enum YouTubeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// API returned an error response
    #[error("YouTube API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// API key missing or rejected
    #[error("YouTube API authentication failed: {0}")]
    Auth(String),

    /// Daily quota exhausted or rate limited
    #[error("YouTube API quota exceeded: {0}")]
    QuotaExceeded(String),

    /// Invalid API base URL
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse API response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for YouTube client operations.
pub type Result<T> = std::result::Result<T, YouTubeError>;
