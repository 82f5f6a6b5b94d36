//! # jarlaunch-core
//!
//! Entry point resolution for executable JAR files.
//!
//! Before a JVM can run `java -jar app.jar`, it has to find out which class to
//! start. That class is named by the `Main-Class` attribute of the archive's
//! manifest. This crate provides:
//! - Manifest scanning for the `Main-Class` attribute ([`manifest`])
//! - Extraction of `META-INF/MANIFEST.MF` from a JAR ([`archive`])
//! - The default launcher policy for malformed manifests ([`launch`])
//!
//! ## Outcomes
//!
//! Resolution never terminates the process. It returns a
//! [`MainClassLookup`]: the class was found, no entry point is declared, or
//! the declared entry point is unusable. Only environment failures (I/O,
//! unreadable archives) are reported as [`ManifestError`].

pub mod archive;
pub mod config;
pub mod error;
pub mod launch;
pub mod manifest;
pub mod prelude;
pub mod types;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{ManifestError, ManifestResult};
pub use manifest::resolve_main_class;
pub use types::{MainClass, MainClassLookup};
