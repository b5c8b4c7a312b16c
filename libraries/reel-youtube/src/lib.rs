//! Reel YouTube
//!
//! Client for the YouTube Data API v3, plus the input-side helpers the
//! curation workflow needs: video id extraction from user-submitted URLs
//! and ISO-8601 duration normalization.
//!
//! # Architecture
//!
//! - [`YouTubeClient`] talks to the Data API with one reusable HTTP
//!   client and bounded timeouts
//! - [`VideoProvider`] abstracts the client so tests can inject fakes
//! - [`MetadataResolver`] wraps a provider and absorbs its failures so
//!   an outage degrades lookups instead of breaking the service
//!
//! # Example
//!
//! ```rust
//! use reel_youtube::{extract_video_id, duration};
//!
//! let id = extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
//! assert_eq!(id.as_deref(), Some("dQw4w9WgXcQ"));
//!
//! assert_eq!(duration::normalize("PT1H2M10S"), "01:02:10");
//! ```

pub mod client;
pub mod duration;
pub mod error;
pub mod extract;
pub mod resolver;
pub mod types;

pub use client::{YouTubeClient, YouTubeConfig};
pub use error::{Result, YouTubeError};
pub use extract::extract_video_id;
pub use resolver::{MetadataResolver, VideoProvider};
pub use types::{VideoMetadata, VideoSummary};
