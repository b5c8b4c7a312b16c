/// Video search API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{
    extract::{Query, State},
    Json,
};
use reel_youtube::VideoSummary;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: String,
    #[serde(default = "default_max_results")]
    pub max_results: u8,
}

fn default_max_results() -> u8 {
    25
}

/// GET /api/videos/search
///
/// Provider outages are not surfaced here; the response degrades to an
/// empty list so browsing stays usable.
pub async fn search_videos(
    State(app_state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<VideoSummary>>> {
    if params.query.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "a search query is required".to_string(),
        ));
    }

    let results = app_state
        .curation
        .search_videos(params.query.trim(), params.max_results)
        .await;

    Ok(Json(results))
}
