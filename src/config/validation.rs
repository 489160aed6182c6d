//! Checks run on merged settings before anything starts.
//!
//! Each section reports the first problem as a `ConfigError::ValidationError`
//! naming the offending key.

use crate::config::error::ConfigError;
use crate::config::settings::{DatabaseConfig, LoggerSettings, MailConfig, ServerConfig, Settings};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
const POSTGRES_SCHEMES: &[&str] = &["postgres://", "postgresql://"];

fn ensure(ok: bool, field: &str, message: impl Into<String>) -> Result<(), ConfigError> {
    if ok {
        Ok(())
    } else {
        Err(ConfigError::validation(field, message))
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(!self.host.trim().is_empty(), "server.host", "Host address is required")?;
        ensure(self.port != 0, "server.port", "Port must be between 1 and 65535")
    }
}

impl DatabaseConfig {
    /// Requires a PostgreSQL URL and a usable pool size and timeout
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(!self.url.is_empty(), "database.url", "Database URL is required")?;
        ensure(
            POSTGRES_SCHEMES.iter().any(|s| self.url.starts_with(s)),
            "database.url",
            "Expected postgres://[user:password@]host[:port]/database",
        )?;
        ensure(
            self.max_connections > 0,
            "database.max_connections",
            "Max connections must be greater than 0",
        )?;
        ensure(
            self.min_connections > 0,
            "database.min_connections",
            "Min connections must be greater than 0",
        )?;
        ensure(
            self.min_connections <= self.max_connections,
            "database.min_connections",
            format!(
                "Min connections ({}) cannot exceed max connections ({})",
                self.min_connections, self.max_connections
            ),
        )?;
        ensure(
            self.connection_timeout > 0,
            "database.connection_timeout",
            "Connection timeout must be greater than 0 seconds",
        )
    }
}

impl LoggerSettings {
    /// Level first, then everything the logger itself would reject
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            LOG_LEVELS.contains(&self.level.to_lowercase().as_str()),
            "logger.level",
            format!(
                "Invalid log level '{}'. Valid levels are: {}",
                self.level,
                LOG_LEVELS.join(", ")
            ),
        )?;
        self.clone().into_logger_config().map(|_| ())
    }
}

impl MailConfig {
    /// Missing SMTP credentials only skip the welcome email at startup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure(
            !self.enabled || self.smtp_port != 0,
            "mail.smtp_port",
            "SMTP port must be between 1 and 65535",
        )
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.logger.validate()?;
        self.mail.validate()
    }
}
