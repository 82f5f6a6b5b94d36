//! # Logging Utilities
//!
//! Logging infrastructure for jarlaunch using `tracing`.
//!
//! This module provides structured logging with support for:
//! - Multiple output formats (JSON for production, pretty for development)
//! - Environment variable configuration
//! - Log level filtering
//! - Optional file output
//!
//! Console output always goes to **stderr**. Standard output is reserved for
//! the resolved class name so the CLI can be used in shell pipelines.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jarlaunch_utils::init_logging;
//!
//! // Initialize with default settings (reads from RUST_LOG env var)
//! let _guard = init_logging().expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```
//!
//! ## Environment Variables
//!
//! - `RUST_LOG`: Set log level filter (e.g., `RUST_LOG=debug`, `RUST_LOG=jarlaunch_core=trace`)
//! - `JARLAUNCH_LOG_FORMAT`: Set output format (`json` or `pretty`, default: `pretty`)
//! - `JARLAUNCH_LOG_FILE`: Optional path to log file (if not set, logs only to console)

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{env, io};

use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::{self};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Environment variable selecting the output format
pub const LOG_FORMAT_ENV: &str = "JARLAUNCH_LOG_FORMAT";

/// Environment variable naming an optional log file
pub const LOG_FILE_ENV: &str = "JARLAUNCH_LOG_FILE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat
{
    /// Pretty-printed, human-readable format (default for development)
    Pretty,
    /// JSON format (default for production)
    Json,
}

impl FromStr for LogFormat
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "pretty" | "dev" | "development" => Ok(LogFormat::Pretty),
            "json" | "prod" | "production" => Ok(LogFormat::Json),
            _ => Err(LoggingError::InvalidFormat(format!(
                "Unknown log format: {s}. Use 'pretty' or 'json'"
            ))),
        }
    }
}

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel
{
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level (default when neither `RUST_LOG` nor a level is given)
    Info,
    /// Debug level
    Debug,
    /// Trace level (most verbose, one event per manifest line)
    Trace,
}

impl From<LogLevel> for Level
{
    fn from(level: LogLevel) -> Self
    {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

impl FromStr for LogLevel
{
    type Err = LoggingError;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {
        match s.to_lowercase().as_str() {
            "error" | "err" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" | "dbg" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            _ => Err(LoggingError::InvalidLevel(format!(
                "Unknown log level: {s}. Use 'error', 'warn', 'info', 'debug', or 'trace'"
            ))),
        }
    }
}

/// Keeps the background log file writer alive
///
/// Dropping the guard flushes any buffered file output. Hold it for the
/// lifetime of the program.
#[must_use = "dropping the guard stops file logging"]
#[derive(Debug, Default)]
pub struct LoggingGuard
{
    _file: Option<WorkerGuard>,
}

/// Initialize logging with default settings
///
/// Reads configuration from environment variables:
/// - `RUST_LOG`: Log level filter (e.g., `debug`, `jarlaunch_core=debug`)
/// - `JARLAUNCH_LOG_FORMAT`: Output format (`json` or `pretty`, default: `pretty`)
/// - `JARLAUNCH_LOG_FILE`: Optional path to log file
///
/// ## Errors
///
/// Returns an error if:
/// - Logging is already initialized
/// - `JARLAUNCH_LOG_FORMAT` holds an unknown format
pub fn init_logging() -> Result<LoggingGuard, LoggingError>
{
    let format = match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => LogFormat::from_str(&raw)?,
        Err(_) => LogFormat::Pretty,
    };

    // Read log level from RUST_LOG or default to INFO
    let default_level = env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LogLevel>().ok())
        .map_or(Level::INFO, Into::into);

    init_logging_internal(format, default_level, false)
}

/// Initialize logging with explicit level and format
///
/// An explicit level overrides `RUST_LOG`.
///
/// ## Example
///
/// ```rust,no_run
/// use jarlaunch_utils::{LogFormat, LogLevel, init_logging_with_level};
///
/// let _guard = init_logging_with_level(LogLevel::Debug, LogFormat::Pretty)
///     .expect("Failed to initialize logging");
/// ```
///
/// ## Errors
///
/// Returns an error if logging is already initialized.
pub fn init_logging_with_level(level: LogLevel, format: LogFormat) -> Result<LoggingGuard, LoggingError>
{
    init_logging_internal(format, level.into(), true)
}

/// Build the level filter
///
/// Priority:
/// 1. An explicit level (from the `--log-level` CLI flag)
/// 2. `RUST_LOG`, which allows module-specific filters like `jarlaunch_core=debug`
/// 3. `default_level`
fn build_filter(default_level: Level, explicit: bool) -> EnvFilter
{
    if explicit {
        return EnvFilter::new(default_level.to_string());
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level.to_string()))
}

/// Open the daily rolling appender for `file_path`
fn file_writer(file_path: &Path) -> (tracing_appender::non_blocking::NonBlocking, WorkerGuard)
{
    let file_appender = tracing_appender::rolling::daily(
        file_path.parent().unwrap_or_else(|| Path::new(".")),
        file_path.file_name().unwrap_or_default(),
    );
    tracing_appender::non_blocking(file_appender)
}

/// Internal initialization function
fn init_logging_internal(format: LogFormat, default_level: Level, explicit: bool) -> Result<LoggingGuard, LoggingError>
{
    // Check if file logging is requested
    let log_file = env::var(LOG_FILE_ENV).ok().map(PathBuf::from);
    let mut guard = LoggingGuard::default();

    let result = match format {
        LogFormat::Pretty => {
            let console_layer = fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(build_filter(default_level, explicit));

            if let Some(file_path) = log_file {
                let (non_blocking, file_guard) = file_writer(&file_path);
                guard._file = Some(file_guard);
                let file_layer = fmt::layer()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false) // No ANSI in files
                    .with_filter(build_filter(default_level, explicit));

                Registry::default().with(console_layer).with(file_layer).try_init()
            } else {
                // Console only
                Registry::default().with(console_layer).try_init()
            }
        }
        LogFormat::Json => {
            let console_layer = fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(ChronoUtc::rfc_3339())
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(io::stderr)
                .with_filter(build_filter(default_level, explicit));

            if let Some(file_path) = log_file {
                let (non_blocking, file_guard) = file_writer(&file_path);
                guard._file = Some(file_guard);
                let file_layer = fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(build_filter(default_level, explicit));

                Registry::default().with(console_layer).with(file_layer).try_init()
            } else {
                // Console only
                Registry::default().with(console_layer).try_init()
            }
        }
    };

    result.map_err(|e| LoggingError::InitializationFailed(e.to_string()))?;
    Ok(guard)
}

/// Logging initialization error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError
{
    /// Invalid log format
    #[error("Invalid log format: {0}")]
    InvalidFormat(String),

    /// Invalid log level
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Failed to initialize logging
    #[error("Failed to initialize logging: {0}")]
    InitializationFailed(String),
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn test_log_format_from_str()
    {
        assert_eq!(LogFormat::from_str("pretty").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert_eq!(LogFormat::from_str("dev").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("PROD").unwrap(), LogFormat::Json);
        assert!(matches!(LogFormat::from_str("invalid"), Err(LoggingError::InvalidFormat(_))));
    }

    #[test]
    fn test_log_level_from_str()
    {
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("debug").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert!(matches!(LogLevel::from_str("invalid"), Err(LoggingError::InvalidLevel(_))));
    }

    #[test]
    fn test_log_level_to_tracing_level()
    {
        assert_eq!(Level::from(LogLevel::Error), Level::ERROR);
        assert_eq!(Level::from(LogLevel::Warn), Level::WARN);
        assert_eq!(Level::from(LogLevel::Info), Level::INFO);
        assert_eq!(Level::from(LogLevel::Debug), Level::DEBUG);
        assert_eq!(Level::from(LogLevel::Trace), Level::TRACE);
    }
}
