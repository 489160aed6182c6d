//! Command-line interface for coursedesk-rs
//!
//! - Argument parsing with clap
//! - Configuration merging (CLI args over files and environment)
//! - Command dispatch to the serve and migrate handlers

pub mod config_merger;
pub mod executor;
pub mod handlers;
pub mod parser;
pub mod validation;

pub use config_merger::ConfigurationMerger;
pub use executor::execute_command;
pub use parser::{Cli, Commands, Environment, LogLevel};

use anyhow::Context;

use crate::config::{Environment as AppEnvironment, Settings};
use crate::logger::{LoggerGuard, init_logger};

/// Load configuration sources, then apply CLI overrides and validate
///
/// Returns the settings together with the environment they were loaded for.
pub fn load_and_merge_config(cli: &Cli) -> anyhow::Result<(Settings, AppEnvironment)> {
    let merger = ConfigurationMerger::from_cli(cli).context("Failed to load configuration")?;
    let settings = merger
        .merge_cli_args(cli)
        .context("Invalid configuration")?;
    Ok((settings, merger.environment()))
}

/// Install the global tracing subscriber described by `settings.logger`
///
/// Keep the returned guard alive for as long as file output should be written.
pub fn init_logger_from_settings(settings: &Settings) -> anyhow::Result<LoggerGuard> {
    let logger_config = settings
        .logger
        .clone()
        .into_logger_config()
        .context("Invalid logger configuration")?;

    init_logger(logger_config)
}
