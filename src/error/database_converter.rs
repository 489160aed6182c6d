use diesel::result::Error as DieselError;

use crate::error::AppError;

/// Converts Diesel errors into `AppError::Database`.
///
/// Repositories look rows up with `.optional()`, so a missing row never
/// reaches this converter. Constraint violations, connection loss and
/// serialization problems all surface as persistence failures.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error, tagging it with the operation that failed.
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        match error {
            DieselError::DatabaseError(kind, info) => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::anyhow!("{:?}: {}", kind, info.message()),
            },
            other => AppError::Database {
                operation: operation.to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}
