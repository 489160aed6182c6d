//! HTTP request handlers for API endpoints.
//!
//! This module contains all request handlers organized by resource type.

pub mod modules;
pub mod users;

use crate::error::{AppError, AppResult};

/// Parses a path id.
///
/// A malformed id is not rejected as a client error: like any other failed
/// lookup statement it surfaces as a persistence failure.
pub(crate) fn parse_id(raw: &str, entity: &str) -> AppResult<i32> {
    raw.trim().parse::<i32>().map_err(|e| AppError::Database {
        operation: format!("look up {} by id", entity),
        source: anyhow::anyhow!("invalid id {:?}: {}", raw, e),
    })
}
