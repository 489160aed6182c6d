//! Service layer for business logic operations.
//!
//! Services encapsulate business logic and coordinate between
//! repositories and handlers.

mod mailer;
mod module_service;
mod user_service;

pub use mailer::{MailError, WelcomeMailer};
pub use module_service::ModuleService;
pub use user_service::UserService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// Cloning is cheap since the stores are reference counted.
#[derive(Clone)]
pub struct Services {
    pub modules: ModuleService,
    pub users: UserService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            modules: ModuleService::new(repos.modules),
            users: UserService::new(repos.users),
        }
    }
}
