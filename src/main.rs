use std::process::ExitCode;

use clap::Parser;
use coursedesk_rs::cli::{Cli, execute_command, init_logger_from_settings, load_and_merge_config};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let (settings, environment) = match load_and_merge_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logger_from_settings(&settings) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Logger initialization error: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(
        version = coursedesk_rs::pkg_version(),
        environment = %environment,
        "Starting coursedesk-rs"
    );

    match execute_command(&cli, settings, environment).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
