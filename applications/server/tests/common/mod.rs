/// Common test utilities and fixtures
use async_trait::async_trait;
use axum::Router;
use reel_server::{
    api,
    services::{AuthService, CurationService},
    state::AppState,
};
use reel_youtube::{MetadataResolver, VideoMetadata, VideoProvider, VideoSummary, YouTubeError};
use sqlx::SqlitePool;
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

/// Test user credentials
pub mod fixtures {
    pub const TEST_EMAIL: &str = "testuser@example.com";
    pub const TEST_USERNAME: &str = "testuser";
    pub const TEST_PASSWORD: &str = "TestPassword123!";
}

/// Video ids the default fake provider knows about
pub const KNOWN_VIDEOS: [&str; 3] = ["AAAAAAAAAAA", "BBBBBBBBBBB", "dQw4w9WgXcQ"];

/// A full application wired to a throwaway database
pub struct TestApp {
    pub app: Router,
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub curation: Arc<CurationService>,
    _temp_dir: TempDir,
}

/// Build a test app with the default provider catalog
pub async fn create_test_app() -> TestApp {
    create_test_app_with_provider(Arc::new(FakeProvider::with_videos(&KNOWN_VIDEOS))).await
}

/// Build a test app around a specific provider stub
pub async fn create_test_app_with_provider(provider: Arc<dyn VideoProvider>) -> TestApp {
    let (pool, temp_dir) = create_test_pool().await;

    let auth_service = Arc::new(AuthService::new(
        "test-secret-key".to_string(),
        1, // 1 hour access
        1, // 1 day refresh
    ));

    let resolver = MetadataResolver::new(provider);
    let curation = Arc::new(CurationService::new(pool.clone(), resolver));

    let app_state = AppState::new(
        pool.clone(),
        Arc::clone(&auth_service),
        Arc::clone(&curation),
    );
    let app = api::create_router(app_state);

    TestApp {
        app,
        pool,
        auth_service,
        curation,
        _temp_dir: temp_dir,
    }
}

/// Open a migrated throwaway database without the HTTP stack
pub async fn create_test_pool() -> (SqlitePool, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = reel_storage::create_pool(&database_url).await.unwrap();
    reel_storage::run_migrations(&pool).await.unwrap();

    (pool, temp_dir)
}

/// Provider stub backed by a fixed in-memory catalog
pub struct FakeProvider {
    videos: HashMap<String, VideoMetadata>,
    fail: bool,
}

impl FakeProvider {
    /// A provider that recognizes exactly the given ids
    pub fn with_videos(ids: &[&str]) -> Self {
        let videos = ids
            .iter()
            .map(|id| {
                (
                    (*id).to_string(),
                    VideoMetadata {
                        title: format!("Video {id}"),
                        description: format!("Description for {id}"),
                        thumbnail_url: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
                        duration: "00:03:00".to_string(),
                    },
                )
            })
            .collect();

        Self {
            videos,
            fail: false,
        }
    }

    /// A provider that recognizes nothing
    pub fn empty() -> Self {
        Self {
            videos: HashMap::new(),
            fail: false,
        }
    }

    /// A provider whose every call errors, simulating an outage
    pub fn failing() -> Self {
        Self {
            videos: HashMap::new(),
            fail: true,
        }
    }

    fn outage() -> YouTubeError {
        YouTubeError::Api {
            status: 503,
            message: "provider down".to_string(),
        }
    }
}

#[async_trait]
impl VideoProvider for FakeProvider {
    async fn video_details(
        &self,
        video_id: &str,
    ) -> Result<Option<VideoMetadata>, YouTubeError> {
        if self.fail {
            return Err(Self::outage());
        }
        Ok(self.videos.get(video_id).cloned())
    }

    async fn search_videos(
        &self,
        _query: &str,
        max_results: u8,
    ) -> Result<Vec<VideoSummary>, YouTubeError> {
        if self.fail {
            return Err(Self::outage());
        }
        Ok(self
            .videos
            .iter()
            .take(max_results as usize)
            .map(|(id, metadata)| VideoSummary {
                youtube_id: id.clone(),
                title: metadata.title.clone(),
                description: metadata.description.clone(),
                thumbnail_url: metadata.thumbnail_url.clone(),
            })
            .collect())
    }
}
