//! Repository layer for data access operations.
//!
//! Each resource is reached through a `ResourceStore` trait object so the
//! services can run against Postgres or, in tests, an in-memory store.

#[cfg(test)]
pub(crate) mod memory;
mod module_repo;
mod store;
mod user_repo;

use std::sync::Arc;

pub use module_repo::ModuleRepository;
pub use store::{ModuleStore, ResourceStore, UserStore};
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Cloning only bumps the reference counts of the stores.
#[derive(Clone)]
pub struct Repositories {
    pub modules: ModuleStore,
    pub users: UserStore,
}

impl Repositories {
    /// Creates Postgres-backed repositories sharing one pool.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            modules: Arc::new(ModuleRepository::new(pool.clone())),
            users: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Creates repositories from arbitrary store implementations.
    pub fn with_stores(modules: ModuleStore, users: UserStore) -> Self {
        Self { modules, users }
    }
}
