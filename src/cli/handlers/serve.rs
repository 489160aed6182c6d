//! Serve command handler
//!
//! Runs the HTTP server, or validates configuration only on `--dry-run`.

use crate::config::{Environment, Settings};
use crate::error::{AppError, AppResult};
use crate::server::Server;

/// Handler for the serve command
pub struct ServeCommandHandler {
    config: Settings,
    environment: Environment,
}

impl ServeCommandHandler {
    pub fn new(config: Settings, environment: Environment) -> Self {
        Self {
            config,
            environment,
        }
    }

    /// Start the server, or validate and report on `dry_run`
    ///
    /// # Errors
    /// - Configuration validation errors
    /// - Pool, migration, bind or runtime errors from [`Server::run`]
    pub async fn execute(self, dry_run: bool) -> AppResult<()> {
        if dry_run {
            return self.validate_only();
        }

        Server::new(self.config, self.environment)
            .run()
            .await
            .map_err(|source| AppError::Internal { source })
    }

    /// Validate configuration without opening any connection
    pub fn validate_only(&self) -> AppResult<()> {
        self.config.validate()?;

        println!("✓ Configuration is valid for {}", self.environment);
        println!("✓ Server would bind to: {}", self.config.server.address());
        println!(
            "✓ Database pool: {}..{} connections, auto_migrate={}",
            self.config.database.min_connections,
            self.config.database.max_connections,
            self.config.database.auto_migrate
        );
        println!(
            "✓ Welcome email: {}",
            if self.config.mail.enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
        println!("Dry run completed successfully");

        Ok(())
    }

    pub fn config(&self) -> &Settings {
        &self.config
    }
}
