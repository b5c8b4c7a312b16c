/// User API routes
use crate::{
    error::{Result, ServerError},
    middleware::AuthenticatedUser,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use reel_core::types::{CreateUser, UpdateUser, User};
use reel_storage::users;

const MIN_PASSWORD_LEN: usize = 8;

/// POST /api/users
/// Register a new account
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<CreateUser>,
) -> Result<(StatusCode, Json<User>)> {
    let email = req.email.trim();
    let username = req.username.trim();

    if email.is_empty() || !email.contains('@') {
        return Err(ServerError::BadRequest(
            "a valid email address is required".to_string(),
        ));
    }
    if username.is_empty() {
        return Err(ServerError::BadRequest(
            "a username is required".to_string(),
        ));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(ServerError::BadRequest(format!(
            "password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }

    let user = User::new(email, username);
    users::create(&app_state.pool, &user).await?;

    let password_hash = app_state.auth_service.hash_password(&req.password)?;
    users::set_password_hash(&app_state.pool, &user.id, &password_hash).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users
/// List visible users; each user only ever sees their own account
pub async fn list_users(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
) -> Result<Json<Vec<User>>> {
    let user = users::get_by_id(&app_state.pool, auth.user_id())
        .await?
        .ok_or_else(|| ServerError::NotFound("User not found".to_string()))?;

    Ok(Json(vec![user]))
}

/// PUT /api/users/me
/// Update the authenticated user's profile
pub async fn update_profile(
    State(app_state): State<AppState>,
    auth: AuthenticatedUser,
    Json(req): Json<UpdateUser>,
) -> Result<Json<User>> {
    if let Some(username) = &req.username {
        if username.trim().is_empty() {
            return Err(ServerError::BadRequest(
                "username cannot be empty".to_string(),
            ));
        }
    }

    let user = users::update_profile(&app_state.pool, auth.user_id(), &req).await?;
    Ok(Json(user))
}
