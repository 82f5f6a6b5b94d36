//! # jarlaunch Utilities
//!
//! Shared utilities, logging, and helpers for jarlaunch.
//!
//! This crate provides the logging setup used by the `jarlaunch` binary,
//! built on `tracing`.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError, LoggingGuard};
pub use tracing::{debug, error, info, trace, warn};
