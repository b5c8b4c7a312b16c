/// Playlists API routes
///
/// Every handler resolves visibility before anything else: a playlist
/// the caller cannot see is reported as missing, never as forbidden.
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    services::curation::AddVideoRequest,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use reel_core::types::{CreatePlaylist, Playlist, PlaylistId, UpdatePlaylist, UserId, Video};
use reel_storage::playlists;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AddCollaboratorRequest {
    pub user_id: String,
}

/// GET /api/playlists
/// All playlists the authenticated user may see: own, shared, public
pub async fn list_playlists(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Playlist>>> {
    let playlists = playlists::list_visible_to(&app_state.pool, auth.user_id()).await?;
    Ok(Json(playlists))
}

/// POST /api/playlists
/// Create a new playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<CreatePlaylist>,
) -> Result<(StatusCode, Json<Playlist>)> {
    if req.title.trim().is_empty() {
        return Err(ServerError::BadRequest("a title is required".to_string()));
    }

    let playlist = playlists::create(&app_state.pool, auth.user_id(), req).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /api/playlists/:id
/// Get playlist details with videos and collaborators
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Playlist>> {
    let playlist_id = PlaylistId::new(id);
    ensure_visible(&app_state, &playlist_id, auth.user_id()).await?;

    let playlist = playlists::get_with_videos(&app_state.pool, &playlist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}

/// PUT /api/playlists/:id
/// Update playlist metadata (owner or collaborator)
pub async fn update_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdatePlaylist>,
) -> Result<Json<Playlist>> {
    let playlist_id = PlaylistId::new(id);
    ensure_visible(&app_state, &playlist_id, auth.user_id()).await?;

    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(ServerError::BadRequest(
                "title cannot be empty".to_string(),
            ));
        }
    }

    let playlist = playlists::update(&app_state.pool, &playlist_id, &req, auth.user_id()).await?;
    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
/// Delete a playlist (owner only)
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    ensure_visible(&app_state, &playlist_id, auth.user_id()).await?;

    playlists::delete(&app_state.pool, &playlist_id, auth.user_id()).await?;
    Ok(Json(serde_json::json!({ "success": true })))
}

/// POST /api/playlists/:id/videos
/// Append a video to the playlist by URL or video id
pub async fn add_video(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<AddVideoRequest>,
) -> Result<(StatusCode, Json<Video>)> {
    let playlist_id = PlaylistId::new(id);

    let video = app_state
        .curation
        .add_video(auth.user_id(), &playlist_id, req)
        .await?;

    Ok((StatusCode::CREATED, Json(video)))
}

/// GET /api/playlists/:id/videos
/// List the playlist's videos in playback order
pub async fn list_videos(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<Video>>> {
    let playlist_id = PlaylistId::new(id);

    let videos = app_state
        .curation
        .list_videos(auth.user_id(), &playlist_id)
        .await?;

    Ok(Json(videos))
}

/// POST /api/playlists/:id/collaborators
/// Grant a user modify access (owner only)
pub async fn add_collaborator(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<AddCollaboratorRequest>,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    ensure_visible(&app_state, &playlist_id, auth.user_id()).await?;

    let collaborator_id = UserId::new(req.user_id);
    playlists::add_collaborator(
        &app_state.pool,
        &playlist_id,
        &collaborator_id,
        auth.user_id(),
    )
    .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// DELETE /api/playlists/:id/collaborators/:user_id
/// Revoke a collaborator's access (owner only)
pub async fn remove_collaborator(
    Path((id, user_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    ensure_visible(&app_state, &playlist_id, auth.user_id()).await?;

    let collaborator_id = UserId::new(user_id);
    playlists::remove_collaborator(
        &app_state.pool,
        &playlist_id,
        &collaborator_id,
        auth.user_id(),
    )
    .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Treat playlists the user cannot see as nonexistent
async fn ensure_visible(
    app_state: &AppState,
    playlist_id: &PlaylistId,
    user_id: &UserId,
) -> Result<()> {
    if playlists::can_view(&app_state.pool, playlist_id, user_id).await? {
        Ok(())
    } else {
        Err(ServerError::NotFound("Playlist not found".to_string()))
    }
}
