//! Application state for Axum web framework.
//!
//! Contains shared services that are accessible across all request handlers.

use crate::db::AsyncDbPool;
use crate::repositories::Repositories;
use crate::services::Services;

/// Application state containing all shared services.
///
/// Cloning is cheap since the services only hold reference-counted stores.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
}

impl AppState {
    /// Creates Postgres-backed state from a connection pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self::with_services(Services::new(Repositories::new(pool)))
    }

    /// Creates state from already-built services.
    pub fn with_services(services: Services) -> Self {
        Self { services }
    }
}
