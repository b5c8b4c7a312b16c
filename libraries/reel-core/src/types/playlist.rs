/// Playlist domain types
use crate::types::{PlaylistId, UserId, Video};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist of externally hosted videos
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Owner user ID (immutable for the playlist's lifetime)
    pub owner_id: UserId,

    /// Playlist title
    pub title: String,

    /// Optional free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the playlist is visible to everyone
    pub is_public: bool,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp (touched on every append)
    pub updated_at: DateTime<Utc>,

    /// Videos in playlist order (only populated by detail lookups)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<Video>>,

    /// Collaborator user IDs (only populated by detail lookups)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collaborators: Option<Vec<UserId>>,
}

impl Playlist {
    /// Create a new private playlist
    pub fn new(owner_id: UserId, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            owner_id,
            title: title.into(),
            description: None,
            is_public: false,
            created_at: now,
            updated_at: now,
            videos: None,
            collaborators: None,
        }
    }
}

/// Payload for creating a playlist
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylist {
    /// Playlist title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Visibility; playlists are private unless requested otherwise
    #[serde(default)]
    pub is_public: bool,
}

/// Payload for updating playlist metadata
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlaylist {
    /// New title
    pub title: Option<String>,

    /// New description
    pub description: Option<String>,

    /// New visibility
    pub is_public: Option<bool>,
}
