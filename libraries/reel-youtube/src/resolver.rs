//! Provider abstraction and graceful-degradation wrapper.
//!
//! [`VideoProvider`] is the seam between the service and the outside
//! world; [`MetadataResolver`] sits on top and absorbs provider failures
//! so that callers only ever see "metadata or nothing".

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::client::YouTubeClient;
use crate::error::Result;
use crate::types::{VideoMetadata, VideoSummary};

/// Source of video metadata.
///
/// Production uses [`YouTubeClient`]; tests substitute their own.
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Look up one video by id, `Ok(None)` when the provider has no record
    async fn video_details(&self, video_id: &str) -> Result<Option<VideoMetadata>>;

    /// Free-text search, newest-relevance order as the provider returns it
    async fn search_videos(&self, query: &str, max_results: u8) -> Result<Vec<VideoSummary>>;
}

#[async_trait]
impl VideoProvider for YouTubeClient {
    async fn video_details(&self, video_id: &str) -> Result<Option<VideoMetadata>> {
        YouTubeClient::video_details(self, video_id).await
    }

    async fn search_videos(&self, query: &str, max_results: u8) -> Result<Vec<VideoSummary>> {
        YouTubeClient::search_videos(self, query, max_results).await
    }
}

/// Failure-absorbing front for a [`VideoProvider`].
///
/// Provider outages degrade lookups to `None` and searches to an empty
/// list instead of propagating errors into the request path.
#[derive(Clone)]
pub struct MetadataResolver {
    provider: Arc<dyn VideoProvider>,
}

impl MetadataResolver {
    /// Wrap a provider
    pub fn new(provider: Arc<dyn VideoProvider>) -> Self {
        Self { provider }
    }

    /// Resolve metadata for a video id, `None` on unknown id or failure
    pub async fn resolve(&self, video_id: &str) -> Option<VideoMetadata> {
        match self.provider.video_details(video_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(video_id, error = %e, "metadata lookup failed");
                None
            }
        }
    }

    /// Search the provider, empty results on failure
    pub async fn search(&self, query: &str, max_results: u8) -> Vec<VideoSummary> {
        match self.provider.search_videos(query, max_results).await {
            Ok(results) => results,
            Err(e) => {
                warn!(query, error = %e, "video search failed");
                Vec::new()
            }
        }
    }
}
