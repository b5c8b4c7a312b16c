/// Shared application state
use crate::services::{AuthService, CurationService};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub auth_service: Arc<AuthService>,
    pub curation: Arc<CurationService>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        auth_service: Arc<AuthService>,
        curation: Arc<CurationService>,
    ) -> Self {
        Self {
            pool,
            auth_service,
            curation,
        }
    }
}
