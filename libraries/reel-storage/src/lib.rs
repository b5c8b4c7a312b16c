//! Reel Storage
//!
//! Multi-user `SQLite` database layer for Reel.
//!
//! This crate provides persistent storage for users, playlists, and the
//! videos curated into them.
//!
//! # Architecture
//!
//! - **Multi-User**: All data supports multiple users from day one
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Append-Only Ordering**: Video positions are assigned once and
//!   never recycled
//!
//! # Example
//!
//! ```rust,no_run
//! use reel_storage::{create_pool, run_migrations};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create database connection
//! let pool = create_pool("sqlite://reel.db").await?;
//! run_migrations(&pool).await?;
//!
//! // List playlists visible to a user
//! let user_id = reel_core::UserId::new("user-1");
//! let playlists = reel_storage::playlists::list_visible_to(&pool, &user_id).await?;
//! # Ok(())
//! # }
//! ```

// Vertical slices
pub mod playlists;
pub mod users;
pub mod videos;

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// This should be called once when the application starts to ensure
/// the database schema is up to date.
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://reel.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    // Parse the URL into options so we can configure SQLite behavior
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true) // Create database file if it doesn't exist
        .journal_mode(SqliteJournalMode::Wal) // Use WAL mode for better concurrency
        .busy_timeout(std::time::Duration::from_secs(30)) // Wait up to 30s for locks
        .foreign_keys(true); // Schema relies on FK cascades

    // Create pool with the configured options
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Whether a sqlx error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}
