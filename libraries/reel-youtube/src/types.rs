//! Response types for the YouTube Data API v3.

use serde::{Deserialize, Serialize};

/// Resolved metadata for a single video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoMetadata {
    /// Video title
    pub title: String,

    /// Video description (may be empty)
    pub description: String,

    /// Highest-resolution thumbnail URL available (may be empty)
    pub thumbnail_url: String,

    /// Normalized duration, `HH:MM:SS`
    pub duration: String,
}

/// Search result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoSummary {
    /// External 11-character video id
    pub youtube_id: String,

    /// Video title
    pub title: String,

    /// Video description (may be empty)
    pub description: String,

    /// Highest-resolution thumbnail URL available (may be empty)
    pub thumbnail_url: String,
}

// Wire format of the Data API. Fields default so a sparse response
// degrades to empty strings instead of a parse failure.

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    #[serde(default)]
    pub snippet: Snippet,
    #[serde(default, rename = "contentDetails")]
    pub content_details: ContentDetails,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: SearchId,
    #[serde(default)]
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Snippet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ContentDetails {
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub default: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub high: Option<Thumbnail>,
    pub standard: Option<Thumbnail>,
    pub maxres: Option<Thumbnail>,
}

impl Thumbnails {
    /// URL of the highest-resolution variant present
    pub fn best_url(&self) -> String {
        [
            &self.maxres,
            &self.standard,
            &self.high,
            &self.medium,
            &self.default,
        ]
        .into_iter()
        .flatten()
        .next()
        .map(|t| t.url.clone())
        .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}
