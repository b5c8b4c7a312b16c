//! Reel Core
//!
//! Domain types and error handling for Reel, a multi-user playlist
//! curation service for externally hosted videos.
//!
//! This crate provides the foundational building blocks used by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Playlist`, `Video` and their id newtypes
//! - **Error Handling**: Unified `ReelError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use reel_core::types::{Playlist, User};
//!
//! // Create a user
//! let user = User::new("alice@example.com", "alice");
//!
//! // Create a playlist owned by that user
//! let playlist = Playlist::new(user.id.clone(), "Road Trip");
//! assert!(!playlist.is_public);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ReelError, Result};

// Export all types
pub use types::{
    // User
    CreateUser, UpdateUser, User,
    // Playlist
    CreatePlaylist, Playlist, UpdatePlaylist,
    // Video
    NewVideo, Video,
    // Identifiers
    PlaylistId, UserId, VideoId,
};
