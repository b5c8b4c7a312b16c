/// Video domain types
use crate::types::{PlaylistId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Video entry inside a playlist
///
/// The media itself is hosted externally; only resolved metadata is stored.
/// `position` is 1-based and unique within the playlist, `duration` is the
/// normalized `HH:MM:SS` display string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    /// Unique video entry identifier
    pub id: VideoId,

    /// Playlist this entry belongs to
    pub playlist_id: PlaylistId,

    /// External 11-character YouTube video id
    pub youtube_id: String,

    /// Video title as resolved from the provider
    pub title: String,

    /// Video description as resolved from the provider (may be empty)
    pub description: String,

    /// Highest-resolution thumbnail URL (may be empty)
    pub thumbnail_url: String,

    /// Normalized duration, `HH:MM:SS` zero-padded
    pub duration: String,

    /// 1-based position within the playlist
    pub position: i64,

    /// When the video was appended
    pub added_at: DateTime<Utc>,
}

/// Resolved metadata payload for persisting a new video entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVideo {
    /// External 11-character YouTube video id
    pub youtube_id: String,

    /// Video title
    pub title: String,

    /// Video description
    pub description: String,

    /// Thumbnail URL
    pub thumbnail_url: String,

    /// Normalized duration, `HH:MM:SS`
    pub duration: String,
}
