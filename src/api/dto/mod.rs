//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by resource:
//! - `module` - Course module request/response DTOs
//! - `user` - User account request/response DTOs

mod module;
mod user;

pub use module::{ModuleRequest, ModuleResponse};
pub use user::{UserRequest, UserResponse};
