/// API route modules
pub mod auth;
pub mod health;
pub mod playlists;
pub mod search;
pub mod users;

use crate::{middleware, state::AppState};
use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the full application router.
///
/// Registration, login and the health probe are public; everything
/// else sits behind the JWT middleware.
pub fn create_router(app_state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health))
        .route("/users", post(users::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh));

    let protected_routes = Router::new()
        // Users
        .route("/users", get(users::list_users))
        .route("/users/me", put(users::update_profile))
        // Playlists
        .route("/playlists", get(playlists::list_playlists))
        .route("/playlists", post(playlists::create_playlist))
        .route("/playlists/:id", get(playlists::get_playlist))
        .route("/playlists/:id", put(playlists::update_playlist))
        .route("/playlists/:id", delete(playlists::delete_playlist))
        // Playlist entries
        .route("/playlists/:id/videos", post(playlists::add_video))
        .route("/playlists/:id/videos", get(playlists::list_videos))
        // Collaborators
        .route(
            "/playlists/:id/collaborators",
            post(playlists::add_collaborator),
        )
        .route(
            "/playlists/:id/collaborators/:user_id",
            delete(playlists::remove_collaborator),
        )
        // Provider search
        .route("/videos/search", get(search::search_videos))
        .layer(axum_middleware::from_fn_with_state(
            Arc::clone(&app_state.auth_service),
            middleware::auth_middleware,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
