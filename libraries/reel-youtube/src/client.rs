//! HTTP client for the YouTube Data API v3.

use std::time::Duration;

use tracing::debug;

use crate::error::{Result, YouTubeError};
use crate::types::{
    SearchListResponse, VideoListResponse, VideoMetadata, VideoSummary,
};
use crate::duration;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`YouTubeClient`]
#[derive(Debug, Clone)]
pub struct YouTubeConfig {
    /// API key issued by the Google Cloud console
    pub api_key: String,
    /// Base URL of the Data API, overridable for tests
    pub base_url: String,
    /// Total request timeout in seconds
    pub timeout_secs: u64,
}

impl YouTubeConfig {
    /// Config pointing at the production API
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the base URL, trimming any trailing slash
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }
}

/// Client for the YouTube Data API v3.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    /// Create a client from config.
    ///
    /// Fails when the API key is empty or the base URL is not HTTP(S).
    pub fn new(config: YouTubeConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(YouTubeError::Auth("API key is empty".to_string()));
        }
        if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
            return Err(YouTubeError::InvalidUrl(config.base_url));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .user_agent(format!("Reel/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    /// Fetch title, description, thumbnail and duration for one video.
    ///
    /// Returns `Ok(None)` when the API knows nothing about the id, which
    /// covers deleted and never-existed videos alike.
    pub async fn video_details(&self, video_id: &str) -> Result<Option<VideoMetadata>> {
        debug!(video_id, "fetching video details");

        let response = self
            .http
            .get(format!("{}/videos", self.base_url))
            .query(&[
                ("part", "snippet,contentDetails"),
                ("id", video_id),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let response = check_status(response).await?;

        let list: VideoListResponse = response
            .json()
            .await
            .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

        Ok(list.items.into_iter().next().map(|item| VideoMetadata {
            title: item.snippet.title,
            description: item.snippet.description,
            thumbnail_url: item.snippet.thumbnails.best_url(),
            duration: duration::normalize(&item.content_details.duration),
        }))
    }

    /// Search for videos matching a free-text query.
    ///
    /// `max_results` is clamped to the API's 1..=50 window.
    pub async fn search_videos(&self, query: &str, max_results: u8) -> Result<Vec<VideoSummary>> {
        let max_results = max_results.clamp(1, 50);
        debug!(query, max_results, "searching videos");

        let max_results = max_results.to_string();
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("type", "video"),
                ("q", query),
                ("maxResults", max_results.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;
        let response = check_status(response).await?;

        let list: SearchListResponse = response
            .json()
            .await
            .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

        Ok(list
            .items
            .into_iter()
            .filter_map(|item| {
                // Playlists and channels come back without a videoId
                let youtube_id = item.id.video_id?;
                Some(VideoSummary {
                    youtube_id,
                    title: item.snippet.title,
                    description: item.snippet.description,
                    thumbnail_url: item.snippet.thumbnails.best_url(),
                })
            })
            .collect())
    }
}

/// Map non-success responses onto the error taxonomy
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(match status.as_u16() {
        401 => YouTubeError::Auth(message),
        403 if message.contains("quota") => YouTubeError::QuotaExceeded(message),
        403 => YouTubeError::Auth(message),
        status => YouTubeError::Api { status, message },
    })
}
