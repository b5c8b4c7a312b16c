//! Playlist queries: visibility, access policy, and collaborator management

use reel_core::{
    error::Result,
    types::{CreatePlaylist, Playlist, PlaylistId, UpdatePlaylist, UserId},
    ReelError,
};
use sqlx::{Row, SqlitePool};

/// Create a new playlist owned by `owner_id`
pub async fn create(
    pool: &SqlitePool,
    owner_id: &UserId,
    create: CreatePlaylist,
) -> Result<Playlist> {
    let mut playlist = Playlist::new(owner_id.clone(), create.title);
    playlist.description = create.description;
    playlist.is_public = create.is_public;

    sqlx::query(
        r#"
        INSERT INTO playlists (id, owner_id, title, description, is_public, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(playlist.id.as_str())
    .bind(playlist.owner_id.as_str())
    .bind(&playlist.title)
    .bind(&playlist.description)
    .bind(playlist.is_public)
    .bind(playlist.created_at)
    .bind(playlist.updated_at)
    .execute(pool)
    .await?;

    Ok(playlist)
}

/// Get playlist by ID (no access policy applied)
pub async fn get_by_id(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let row = sqlx::query(
        r#"
        SELECT id, owner_id, title, description, is_public, created_at, updated_at
        FROM playlists
        WHERE id = ?
        "#,
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| Playlist {
        id: row.get("id"),
        owner_id: row.get("owner_id"),
        title: row.get("title"),
        description: row.get("description"),
        is_public: row.get::<i64, _>("is_public") != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
        videos: None,
        collaborators: None,
    }))
}

/// Get playlist with its ordered videos and collaborator list
pub async fn get_with_videos(pool: &SqlitePool, id: &PlaylistId) -> Result<Option<Playlist>> {
    let Some(mut playlist) = get_by_id(pool, id).await? else {
        return Ok(None);
    };

    playlist.videos = Some(crate::videos::list_for_playlist(pool, id).await?);
    playlist.collaborators = Some(get_collaborators(pool, id).await?);

    Ok(Some(playlist))
}

/// List playlists visible to a user: owned, shared as collaborator, or public
pub async fn list_visible_to(pool: &SqlitePool, user_id: &UserId) -> Result<Vec<Playlist>> {
    let rows = sqlx::query(
        r#"
        SELECT DISTINCT
            p.id, p.owner_id, p.title, p.description, p.is_public,
            p.created_at, p.updated_at
        FROM playlists p
        LEFT JOIN playlist_collaborators pc ON p.id = pc.playlist_id
        WHERE p.owner_id = ? OR pc.user_id = ? OR p.is_public = 1
        ORDER BY p.created_at DESC
        "#,
    )
    .bind(user_id.as_str())
    .bind(user_id.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| Playlist {
            id: row.get("id"),
            owner_id: row.get("owner_id"),
            title: row.get("title"),
            description: row.get("description"),
            is_public: row.get::<i64, _>("is_public") != 0,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
            videos: None,
            collaborators: None,
        })
        .collect())
}

/// Update playlist metadata (requires modify permission)
pub async fn update(
    pool: &SqlitePool,
    id: &PlaylistId,
    update: &UpdatePlaylist,
    user_id: &UserId,
) -> Result<Playlist> {
    if get_by_id(pool, id).await?.is_none() {
        return Err(ReelError::PlaylistNotFound(id.clone()));
    }
    if !can_modify(pool, id, user_id).await? {
        return Err(ReelError::PermissionDenied);
    }

    sqlx::query(
        r#"
        UPDATE playlists
        SET title = COALESCE(?, title),
            description = COALESCE(?, description),
            is_public = COALESCE(?, is_public),
            updated_at = datetime('now')
        WHERE id = ?
        "#,
    )
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.is_public)
    .bind(id.as_str())
    .execute(pool)
    .await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| ReelError::storage("Failed to retrieve updated playlist".to_string()))
}

/// Delete playlist (owner only; videos cascade)
pub async fn delete(pool: &SqlitePool, id: &PlaylistId, user_id: &UserId) -> Result<()> {
    let playlist = get_by_id(pool, id).await?;

    match playlist {
        Some(p) if p.owner_id == *user_id => {
            sqlx::query("DELETE FROM playlists WHERE id = ?")
                .bind(id.as_str())
                .execute(pool)
                .await?;
            Ok(())
        }
        Some(_) => Err(ReelError::PermissionDenied),
        None => Err(ReelError::PlaylistNotFound(id.clone())),
    }
}

/// Add a collaborator (owner only)
///
/// Re-adding an existing collaborator is a no-op; adding the owner is
/// rejected since ownership already grants every permission.
pub async fn add_collaborator(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    user_id: &UserId,
    owner_id: &UserId,
) -> Result<()> {
    let playlist = verify_owner(pool, playlist_id, owner_id).await?;

    if playlist.owner_id == *user_id {
        return Err(ReelError::invalid_input(
            "playlist owner cannot be added as a collaborator",
        ));
    }
    if crate::users::get_by_id(pool, user_id).await?.is_none() {
        return Err(ReelError::UserNotFound(user_id.clone()));
    }

    sqlx::query(
        r#"
        INSERT INTO playlist_collaborators (playlist_id, user_id)
        VALUES (?, ?)
        ON CONFLICT(playlist_id, user_id) DO NOTHING
        "#,
    )
    .bind(playlist_id.as_str())
    .bind(user_id.as_str())
    .execute(pool)
    .await?;

    Ok(())
}

/// Remove a collaborator (owner only)
pub async fn remove_collaborator(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    user_id: &UserId,
    owner_id: &UserId,
) -> Result<()> {
    verify_owner(pool, playlist_id, owner_id).await?;

    sqlx::query("DELETE FROM playlist_collaborators WHERE playlist_id = ? AND user_id = ?")
        .bind(playlist_id.as_str())
        .bind(user_id.as_str())
        .execute(pool)
        .await?;

    Ok(())
}

/// List collaborator user IDs for a playlist
pub async fn get_collaborators(pool: &SqlitePool, id: &PlaylistId) -> Result<Vec<UserId>> {
    let rows = sqlx::query(
        "SELECT user_id FROM playlist_collaborators WHERE playlist_id = ? ORDER BY added_at",
    )
    .bind(id.as_str())
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|row| row.get("user_id")).collect())
}

/// Whether a user may view a playlist: public, owner, or collaborator
pub async fn can_view(pool: &SqlitePool, id: &PlaylistId, user_id: &UserId) -> Result<bool> {
    let row = sqlx::query(
        r#"
        SELECT
            CASE
                WHEN p.is_public = 1 THEN 1
                WHEN p.owner_id = ? THEN 1
                WHEN pc.user_id IS NOT NULL THEN 1
                ELSE 0
            END as has_permission
        FROM playlists p
        LEFT JOIN playlist_collaborators pc ON p.id = pc.playlist_id AND pc.user_id = ?
        WHERE p.id = ?
        LIMIT 1
        "#,
    )
    .bind(user_id.as_str())
    .bind(user_id.as_str())
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row
        .map(|r| r.get::<i64, _>("has_permission") == 1)
        .unwrap_or(false))
}

/// Whether a user may modify a playlist: owner or collaborator only
///
/// Public visibility never grants write access.
pub async fn can_modify(pool: &SqlitePool, id: &PlaylistId, user_id: &UserId) -> Result<bool> {
    let row = sqlx::query(
        r#"
        SELECT
            CASE
                WHEN p.owner_id = ? THEN 1
                WHEN pc.user_id IS NOT NULL THEN 1
                ELSE 0
            END as has_permission
        FROM playlists p
        LEFT JOIN playlist_collaborators pc ON p.id = pc.playlist_id AND pc.user_id = ?
        WHERE p.id = ?
        LIMIT 1
        "#,
    )
    .bind(user_id.as_str())
    .bind(user_id.as_str())
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row
        .map(|r| r.get::<i64, _>("has_permission") == 1)
        .unwrap_or(false))
}

// Helper functions

async fn verify_owner(
    pool: &SqlitePool,
    playlist_id: &PlaylistId,
    owner_id: &UserId,
) -> Result<Playlist> {
    match get_by_id(pool, playlist_id).await? {
        Some(p) if p.owner_id == *owner_id => Ok(p),
        Some(_) => Err(ReelError::PermissionDenied),
        None => Err(ReelError::PlaylistNotFound(playlist_id.clone())),
    }
}
