//! Video entry queries: append-only ordering within playlists

use chrono::Utc;
use reel_core::{
    error::Result,
    types::{NewVideo, PlaylistId, Video, VideoId},
    ReelError,
};
use sqlx::{Row, SqlitePool};

/// List a playlist's videos in playback order
pub async fn list_for_playlist(pool: &SqlitePool, playlist_id: &PlaylistId) -> Result<Vec<Video>> {
    let rows = sqlx::query(
        r#"
        SELECT id, playlist_id, youtube_id, title, description, thumbnail_url,
               duration, position, added_at
        FROM videos
        WHERE playlist_id = ?
        ORDER BY position
        "#,
    )
    .bind(playlist_id.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Video {
            id: row.get("id"),
            playlist_id: row.get("playlist_id"),
            youtube_id: row.get("youtube_id"),
            title: row.get("title"),
            description: row.get("description"),
            thumbnail_url: row.get("thumbnail_url"),
            duration: row.get("duration"),
            position: row.get("position"),
            added_at: row.get("added_at"),
        })
        .collect())
}

/// Find an entry by its external video id
pub async fn find_by_youtube_id(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    youtube_id: &str,
) -> Result<Option<Video>> {
    let row = sqlx::query(
        r#"
        SELECT id, playlist_id, youtube_id, title, description, thumbnail_url,
               duration, position, added_at
        FROM videos
        WHERE playlist_id = ? AND youtube_id = ?
        "#,
    )
    .bind(playlist_id.as_str())
    .bind(youtube_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Video {
        id: row.get("id"),
        playlist_id: row.get("playlist_id"),
        youtube_id: row.get("youtube_id"),
        title: row.get("title"),
        description: row.get("description"),
        thumbnail_url: row.get("thumbnail_url"),
        duration: row.get("duration"),
        position: row.get("position"),
        added_at: row.get("added_at"),
    }))
}

/// Append a resolved video to the end of a playlist
///
/// The duplicate check, position assignment, insert, and `updated_at`
/// touch run in one transaction. Appending an id the playlist already
/// holds fails with `Duplicate`; the position is `MAX(position) + 1`,
/// 1-based, and never recycled.
pub async fn append(pool: &SqlitePool, playlist_id: &PlaylistId, new: NewVideo) -> Result<Video> {
    let mut tx = pool.begin().await?;

    // Re-check inside the transaction; any earlier check can race
    let existing = sqlx::query("SELECT id FROM videos WHERE playlist_id = ? AND youtube_id = ?")
        .bind(playlist_id.as_str())
        .bind(&new.youtube_id)
        .fetch_optional(&mut *tx)
        .await?;
    if existing.is_some() {
        return Err(ReelError::duplicate(format!(
            "video {} is already in playlist {}",
            new.youtube_id, playlist_id
        )));
    }

    // Next position
    let next_position_row = sqlx::query(
        "SELECT COALESCE(MAX(position), 0) + 1 as next_pos FROM videos WHERE playlist_id = ?",
    )
    .bind(playlist_id.as_str())
    .fetch_one(&mut *tx)
    .await?;

    let next_position: i64 = next_position_row.get("next_pos");

    let video = Video {
        id: VideoId::generate(),
        playlist_id: playlist_id.clone(),
        youtube_id: new.youtube_id,
        title: new.title,
        description: new.description,
        thumbnail_url: new.thumbnail_url,
        duration: new.duration,
        position: next_position,
        added_at: Utc::now(),
    };

    let insert = sqlx::query(
        r#"
        INSERT INTO videos (id, playlist_id, youtube_id, title, description,
                            thumbnail_url, duration, position, added_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(video.id.as_str())
    .bind(video.playlist_id.as_str())
    .bind(&video.youtube_id)
    .bind(&video.title)
    .bind(&video.description)
    .bind(&video.thumbnail_url)
    .bind(&video.duration)
    .bind(video.position)
    .bind(video.added_at)
    .execute(&mut *tx)
    .await;

    if let Err(e) = insert {
        // A lost race lands on one of the UNIQUE indexes; tell them apart
        if crate::is_unique_violation(&e) {
            let msg = e.to_string();
            if msg.contains("youtube_id") {
                return Err(ReelError::duplicate(format!(
                    "video {} is already in playlist {}",
                    video.youtube_id, playlist_id
                )));
            }
            return Err(ReelError::Database(format!(
                "concurrent append to playlist {}: {}",
                playlist_id, msg
            )));
        }
        return Err(e.into());
    }

    // Any append counts as a playlist modification
    sqlx::query("UPDATE playlists SET updated_at = datetime('now') WHERE id = ?")
        .bind(playlist_id.as_str())
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(video)
}
