/// Server services
pub mod auth;
pub mod curation;

pub use auth::AuthService;
pub use curation::CurationService;
