//! # Scan Configuration
//!
//! Limits applied while scanning a manifest.
//!
//! The maximum line length is supplied by whoever embeds the resolver (a JVM
//! launcher, the `jarlaunch` CLI, a test). It defaults to the 72-byte line
//! limit of the JAR manifest format and can be overridden from the
//! environment:
//!
//! - `JARLAUNCH_MANIFEST_LINE_MAX`: maximum physical line length in bytes,
//!   not counting the line terminator

use std::env;

use crate::error::{ManifestError, ManifestResult};

/// Environment variable holding the maximum manifest line length
pub const LINE_MAX_ENV: &str = "JARLAUNCH_MANIFEST_LINE_MAX";

/// Maximum manifest line length defined by the JAR file format
pub const DEFAULT_MAX_LINE_LENGTH: usize = 72;

/// Configuration for a single manifest scan
///
/// ## Example
///
/// ```rust
/// use jarlaunch_core::config::ScanConfig;
///
/// let config = ScanConfig::default();
/// assert_eq!(config.max_line_length(), 72);
///
/// let wide = ScanConfig::new(512)?;
/// assert_eq!(wide.max_line_length(), 512);
/// # Ok::<(), jarlaunch_core::error::ManifestError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig
{
    max_line_length: usize,
}

impl ScanConfig
{
    /// Create a configuration with an explicit maximum line length
    ///
    /// ## Errors
    ///
    /// Returns `InvalidConfig` if `max_line_length` is zero.
    pub fn new(max_line_length: usize) -> ManifestResult<Self>
    {
        if max_line_length == 0 {
            return Err(ManifestError::InvalidConfig(
                "maximum manifest line length must be greater than zero".to_string(),
            ));
        }
        Ok(Self { max_line_length })
    }

    /// Build a configuration from the environment, falling back to defaults
    ///
    /// ## Errors
    ///
    /// Returns `InvalidConfig` if `JARLAUNCH_MANIFEST_LINE_MAX` is set but is
    /// not a positive integer.
    pub fn from_env() -> ManifestResult<Self>
    {
        match env::var(LINE_MAX_ENV) {
            Ok(raw) => Self::parse_line_max(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Parse a textual maximum line length (as found in the environment)
    ///
    /// ## Errors
    ///
    /// Returns `InvalidConfig` if `raw` is not a positive integer.
    pub fn parse_line_max(raw: &str) -> ManifestResult<Self>
    {
        let value = raw
            .trim()
            .parse::<usize>()
            .map_err(|e| ManifestError::InvalidConfig(format!("{LINE_MAX_ENV}={raw:?}: {e}")))?;
        Self::new(value)
    }

    /// Maximum physical line length in bytes, excluding the line terminator
    pub const fn max_line_length(&self) -> usize
    {
        self.max_line_length
    }

    /// Return a copy with a different maximum line length
    ///
    /// ## Errors
    ///
    /// Returns `InvalidConfig` if `max_line_length` is zero.
    pub fn with_max_line_length(self, max_line_length: usize) -> ManifestResult<Self>
    {
        let validated = Self::new(max_line_length)?;
        Ok(Self {
            max_line_length: validated.max_line_length,
            ..self
        })
    }
}

impl Default for ScanConfig
{
    fn default() -> Self
    {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}
