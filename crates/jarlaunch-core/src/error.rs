//! # Error Types
//!
//! General error handling for manifest resolution.
//!
//! We use `thiserror` to automatically generate `Error` trait implementations
//! and nice error messages.
//!
//! Note that a missing manifest, a manifest without a `Main-Class` attribute,
//! and a malformed `Main-Class` value are **not** errors. Those are outcomes
//! reported through [`MainClassLookup`](crate::types::MainClassLookup). The
//! variants here are environment failures the resolver cannot recover from.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for resolver operations
///
/// ## Error Categories
///
/// 1. **Argument errors**: InvalidArgument
/// 2. **Configuration errors**: InvalidConfig
/// 3. **Archive errors**: Archive
/// 4. **I/O errors**: Io (a read failing part way through a manifest, etc.)
#[derive(Error, Debug)]
pub enum ManifestError
{
    /// Invalid argument passed to a resolver function
    ///
    /// Examples:
    /// - An empty manifest path
    /// - An empty archive path
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration value could not be accepted
    ///
    /// Raised when `JARLAUNCH_MANIFEST_LINE_MAX` (or a value passed in code)
    /// is not a positive integer.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The JAR could not be read as a zip archive
    #[error("Failed to read archive {path}: {source}")]
    Archive
    {
        /// Path of the archive that failed
        path: PathBuf,
        /// Underlying zip error
        #[source]
        source: zip::result::ZipError,
    },

    /// I/O error (for file operations, etc.)
    ///
    /// This is a standard Rust `std::io::Error` converted to our error type.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `Result<T, ManifestError>`
///
/// ```rust
/// use jarlaunch_core::error::ManifestResult;
/// fn foo() -> ManifestResult<()>
/// {
///     Ok(())
/// }
/// ```
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;
