//! Logger Module
//!
//! Logging system based on `tracing-subscriber` with support for:
//! - Console output with color control
//! - Rolling file output in Full, Compact or JSON format, written from a
//!   background thread by `tracing-appender`

pub mod config;
pub mod error;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the background file writer alive.
///
/// Dropping it flushes buffered lines and stops the writer thread, so hold
/// it until the process exits.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggerGuard {
    _file: Option<WorkerGuard>,
}

/// Initialize the global subscriber with the given configuration
pub fn init_logger(config: LoggerConfig) -> anyhow::Result<LoggerGuard> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    // File layer goes first so console ANSI settings cannot leak into span
    // fields written to the file (tokio-rs/tracing#1817).
    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
    let mut file_guard = None;
    if config.file.enabled {
        let (writer, guard) = file_writer(&config.file)?;
        layers.push(file_layer(writer, config.file.format));
        file_guard = Some(guard);
    }
    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install global subscriber: {}", e))?;

    Ok(LoggerGuard { _file: file_guard })
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer(writer: NonBlocking, format: LogFormat) -> BoxedLayer {
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    match format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

/// Builds the rolling appender and moves it onto a non-blocking writer.
fn file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
    let appender = rolling_appender(config)?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Creates the log directory and the rolling appender for `config`.
fn rolling_appender(config: &FileConfig) -> Result<RollingFileAppender, LoggerError> {
    let prefix = config
        .file_name()
        .ok_or_else(|| LoggerError::config("log file path has no file name"))?;
    let directory = config.directory();
    std::fs::create_dir_all(&directory)?;

    let mut builder = RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(prefix);
    if config.max_files > 0 {
        builder = builder.max_log_files(config.max_files);
    }

    builder
        .build(&directory)
        .map_err(|e| LoggerError::config(format!("failed to open log file: {}", e)))
}
