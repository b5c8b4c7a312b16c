/// Playlist curation service - the video append workflow
///
/// Everything a video goes through between "user pasted something" and
/// "row in the videos table" happens here, in a fixed order: access
/// check, input validation, id extraction, duplicate check, metadata
/// resolution, then the transactional append. Metadata resolution is
/// mandatory; a video the provider does not recognize is never stored.
use reel_core::types::{NewVideo, PlaylistId, UserId, Video};
use reel_core::{ReelError, Result};
use reel_storage::{playlists, videos};
use reel_youtube::{extract_video_id, MetadataResolver, VideoSummary};
use serde::Deserialize;
use sqlx::SqlitePool;

/// Request body for adding a video to a playlist.
///
/// Clients send either a full URL or a bare video id; when both are
/// present the URL wins.
#[derive(Debug, Default, Deserialize)]
pub struct AddVideoRequest {
    pub url: Option<String>,
    pub youtube_id: Option<String>,
}

pub struct CurationService {
    pool: SqlitePool,
    resolver: MetadataResolver,
}

impl CurationService {
    pub fn new(pool: SqlitePool, resolver: MetadataResolver) -> Self {
        Self { pool, resolver }
    }

    /// Append a video to the end of a playlist.
    ///
    /// Playlists the user cannot see are reported as missing rather
    /// than forbidden. Re-adding a video already in the playlist fails
    /// with a duplicate error and leaves the playlist untouched.
    pub async fn add_video(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
        request: AddVideoRequest,
    ) -> Result<Video> {
        if !playlists::can_view(&self.pool, playlist_id, user_id).await? {
            return Err(ReelError::PlaylistNotFound(playlist_id.clone()));
        }
        if !playlists::can_modify(&self.pool, playlist_id, user_id).await? {
            return Err(ReelError::PermissionDenied);
        }

        let raw = [request.url, request.youtube_id]
            .into_iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .find(|s| !s.is_empty())
            .ok_or_else(|| ReelError::invalid_input("a video url or youtube_id is required"))?;

        let youtube_id = extract_video_id(&raw).ok_or_else(|| {
            ReelError::invalid_input(format!("no YouTube video id found in '{}'", raw))
        })?;

        // Checked before the provider round trip; the append re-checks
        // inside its transaction
        if videos::find_by_youtube_id(&self.pool, playlist_id, &youtube_id)
            .await?
            .is_some()
        {
            return Err(ReelError::duplicate(format!(
                "video {} is already in playlist {}",
                youtube_id, playlist_id
            )));
        }

        let metadata = self.resolver.resolve(&youtube_id).await.ok_or_else(|| {
            ReelError::invalid_input(format!(
                "video {} was not recognized by the provider",
                youtube_id
            ))
        })?;

        let video = videos::append(
            &self.pool,
            playlist_id,
            NewVideo {
                youtube_id,
                title: metadata.title,
                description: metadata.description,
                thumbnail_url: metadata.thumbnail_url,
                duration: metadata.duration,
            },
        )
        .await?;

        tracing::info!(
            playlist_id = %playlist_id,
            youtube_id = %video.youtube_id,
            position = video.position,
            "video appended"
        );

        Ok(video)
    }

    /// List a playlist's videos in playback order
    pub async fn list_videos(
        &self,
        user_id: &UserId,
        playlist_id: &PlaylistId,
    ) -> Result<Vec<Video>> {
        if !playlists::can_view(&self.pool, playlist_id, user_id).await? {
            return Err(ReelError::PlaylistNotFound(playlist_id.clone()));
        }

        videos::list_for_playlist(&self.pool, playlist_id).await
    }

    /// Search the provider for videos; outages surface as empty results
    pub async fn search_videos(&self, query: &str, max_results: u8) -> Vec<VideoSummary> {
        self.resolver.search(query, max_results).await
    }
}
