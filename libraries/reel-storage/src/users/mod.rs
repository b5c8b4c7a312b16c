//! User accounts and credential queries

use reel_core::{
    error::Result,
    types::{UpdateUser, User, UserId},
    ReelError,
};
use sqlx::{Row, SqlitePool};

/// Insert a new user account
///
/// The caller provides a fully constructed `User`; credential material is
/// stored separately via [`set_password_hash`].
pub async fn create(pool: &SqlitePool, user: &User) -> Result<()> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (id, email, username, avatar_url, bio, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(user.id.as_str())
    .bind(&user.email)
    .bind(&user.username)
    .bind(&user.avatar_url)
    .bind(&user.bio)
    .bind(user.created_at)
    .execute(pool)
    .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) if crate::is_unique_violation(&e) => Err(ReelError::duplicate(format!(
            "email already registered: {}",
            user.email
        ))),
        Err(e) => Err(e.into()),
    }
}

/// Get a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: &UserId) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, email, username, avatar_url, bio, created_at FROM users WHERE id = ?",
    )
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| User {
        id: row.get("id"),
        email: row.get("email"),
        username: row.get("username"),
        avatar_url: row.get("avatar_url"),
        bio: row.get("bio"),
        created_at: row.get("created_at"),
    }))
}

/// Get a user by email (login lookup)
pub async fn get_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>> {
    let row = sqlx::query(
        "SELECT id, email, username, avatar_url, bio, created_at FROM users WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| User {
        id: row.get("id"),
        email: row.get("email"),
        username: row.get("username"),
        avatar_url: row.get("avatar_url"),
        bio: row.get("bio"),
        created_at: row.get("created_at"),
    }))
}

/// Apply self-service profile edits and return the updated user
pub async fn update_profile(pool: &SqlitePool, id: &UserId, update: &UpdateUser) -> Result<User> {
    sqlx::query(
        r#"
        UPDATE users
        SET username = COALESCE(?, username),
            avatar_url = COALESCE(?, avatar_url),
            bio = COALESCE(?, bio)
        WHERE id = ?
        "#,
    )
    .bind(&update.username)
    .bind(&update.avatar_url)
    .bind(&update.bio)
    .bind(id.as_str())
    .execute(pool)
    .await?;

    get_by_id(pool, id)
        .await?
        .ok_or_else(|| ReelError::UserNotFound(id.clone()))
}

/// Get user's password hash for authentication
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `user_id` - User ID to look up
///
/// # Returns
///
/// Returns the password hash if found, or None if user has no credentials
pub async fn get_password_hash(pool: &SqlitePool, user_id: &UserId) -> Result<Option<String>> {
    let row = sqlx::query("SELECT password_hash FROM user_credentials WHERE user_id = ?")
        .bind(user_id.as_str())
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|r| r.get("password_hash")))
}

/// Create or update user credentials
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `user_id` - User ID
/// * `password_hash` - Hashed password (should already be hashed with bcrypt)
pub async fn set_password_hash(
    pool: &SqlitePool,
    user_id: &UserId,
    password_hash: &str,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO user_credentials (user_id, password_hash, updated_at)
        VALUES (?, ?, datetime('now'))
        ON CONFLICT(user_id)
        DO UPDATE SET password_hash = excluded.password_hash, updated_at = datetime('now')
        "#,
    )
    .bind(user_id.as_str())
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(())
}

/// Check if user has credentials set
pub async fn has_credentials(pool: &SqlitePool, user_id: &UserId) -> Result<bool> {
    let row = sqlx::query("SELECT COUNT(*) as count FROM user_credentials WHERE user_id = ?")
        .bind(user_id.as_str())
        .fetch_one(pool)
        .await?;

    Ok(row.get::<i64, _>("count") > 0)
}
