//! Test helpers and fixtures for storage integration tests
//!
//! These helpers create test databases using REAL SQLite files (NOT in-memory)
//! to match production behavior and properly test migrations, constraints, and indexes.

use reel_core::types::{CreatePlaylist, NewVideo, PlaylistId, User, UserId};
use sqlx::SqlitePool;
use tempfile::TempDir;

/// Test database wrapper that cleans up on drop
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    /// Create a new test database with migrations applied
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}", db_path.display());

        let pool = reel_storage::create_pool(&db_url)
            .await
            .expect("Failed to create pool");

        // Run migrations
        reel_storage::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self {
            pool,
            _temp_dir: temp_dir,
        }
    }

    /// Get the pool reference
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Test fixture: Create a test user
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> UserId {
    let user = User::new(format!("{username}@example.com"), username);

    reel_storage::users::create(pool, &user)
        .await
        .expect("Failed to create test user");

    user.id
}

/// Test fixture: Create a private test playlist
pub async fn create_test_playlist(pool: &SqlitePool, title: &str, owner_id: &UserId) -> PlaylistId {
    let playlist = reel_storage::playlists::create(
        pool,
        owner_id,
        CreatePlaylist {
            title: title.to_string(),
            description: None,
            is_public: false,
        },
    )
    .await
    .expect("Failed to create test playlist");

    playlist.id
}

/// Test fixture: Create a public test playlist
pub async fn create_public_playlist(pool: &SqlitePool, title: &str, owner_id: &UserId) -> PlaylistId {
    let playlist = reel_storage::playlists::create(
        pool,
        owner_id,
        CreatePlaylist {
            title: title.to_string(),
            description: None,
            is_public: true,
        },
    )
    .await
    .expect("Failed to create test playlist");

    playlist.id
}

/// Test fixture: Resolved metadata payload for a video entry
pub fn test_video(youtube_id: &str, title: &str) -> NewVideo {
    NewVideo {
        youtube_id: youtube_id.to_string(),
        title: title.to_string(),
        description: format!("Description of {title}"),
        thumbnail_url: format!("https://i.ytimg.com/vi/{youtube_id}/hqdefault.jpg"),
        duration: "00:03:00".to_string(),
    }
}
