//! # Launch Policy
//!
//! Decides what a launcher does with a [`MainClassLookup`].
//!
//! The resolver itself never terminates the process. A malformed `Main-Class`
//! leaves no entry point to fall back on, so the default policy hands the
//! caller a [`FatalManifest`] carrying the diagnostic and the manifest-error
//! exit status. The caller prints it once: the `jarlaunch` binary writes it to
//! stderr and exits with that status, tests and embedders inspect it instead.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{MainClass, MainClassLookup, MalformedManifest};

/// Process exit statuses used by launchers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExitStatus
{
    /// Normal termination
    Success,
    /// Environment failure (I/O, unreadable archive, bad configuration)
    Failure,
    /// The JAR manifest declares an unusable entry point
    ManifestJar,
}

impl ExitStatus
{
    /// Numeric status passed to `std::process::exit`
    pub const fn code(self) -> i32
    {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::ManifestJar => 3,
        }
    }
}

impl fmt::Display for ExitStatus
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.code())
    }
}

/// A manifest problem the launcher cannot recover from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FatalManifest
{
    /// Exit status the process should terminate with
    pub status: ExitStatus,
    /// Name of the operation that failed
    pub operation: &'static str,
    /// Manifest that caused the failure
    pub manifest: PathBuf,
    /// What was wrong with it
    pub problem: MalformedManifest,
}

impl FatalManifest
{
    /// Human-readable diagnostic naming the operation and manifest path
    pub fn message(&self) -> String
    {
        match self.problem {
            MalformedManifest::MissingClassName { .. } => {
                format!("Missing class name in manifest file {}", self.manifest.display())
            }
            problem => format!("Invalid Main-Class in manifest file {}: {problem}", self.manifest.display()),
        }
    }
}

impl fmt::Display for FatalManifest
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}: {}", self.operation, self.message())
    }
}

impl std::error::Error for FatalManifest {}

/// Operation label used in diagnostics
pub const RESOLVE_OPERATION: &str = "manifest_get_main";

/// Apply the default launch policy to a lookup
///
/// - `Found` becomes `Ok(Some(class))`
/// - `Absent` becomes `Ok(None)`; nothing is reported as an error
/// - `Malformed` becomes `Err(FatalManifest)` with [`ExitStatus::ManifestJar`]
///
/// Neither outcome is reported above debug level; printing the diagnostic is
/// left to the caller.
///
/// ## Errors
///
/// Returns `FatalManifest` when the manifest declares an unusable entry point.
///
/// ## Example
///
/// ```rust
/// use jarlaunch_core::launch::{enforce, ExitStatus};
/// use jarlaunch_core::types::{MainClassLookup, MalformedManifest};
///
/// let lookup = MainClassLookup::Malformed(MalformedManifest::MissingClassName { line: 1 });
/// let fatal = enforce(lookup, "/tmp/MANIFEST.MF").unwrap_err();
/// assert_eq!(fatal.status, ExitStatus::ManifestJar);
/// assert!(fatal.to_string().contains("/tmp/MANIFEST.MF"));
/// ```
pub fn enforce(lookup: MainClassLookup, manifest: impl AsRef<Path>) -> Result<Option<MainClass>, FatalManifest>
{
    let manifest = manifest.as_ref();
    match lookup {
        MainClassLookup::Found(class) => Ok(Some(class)),
        MainClassLookup::Absent(reason) => {
            debug!(manifest = %manifest.display(), "No entry point declared: {reason}");
            Ok(None)
        }
        MainClassLookup::Malformed(problem) => {
            let fatal = FatalManifest {
                status: ExitStatus::ManifestJar,
                operation: RESOLVE_OPERATION,
                manifest: manifest.to_path_buf(),
                problem,
            };
            debug!(operation = fatal.operation, line = problem.line(), "Unusable entry point");
            Err(fatal)
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::types::Absence;

    #[test]
    fn test_exit_codes_are_distinct()
    {
        assert_eq!(ExitStatus::Success.code(), 0);
        assert_ne!(ExitStatus::ManifestJar.code(), ExitStatus::Failure.code());
        assert_ne!(ExitStatus::ManifestJar.code(), 0);
    }

    #[test]
    fn test_found_passes_through()
    {
        let class = enforce(MainClassLookup::Found(MainClass::from("a.B")), "m").unwrap();
        assert_eq!(class, Some(MainClass::from("a.B")));
    }

    #[test]
    fn test_absent_is_not_fatal()
    {
        assert_eq!(enforce(MainClassLookup::Absent(Absence::NoManifest), "m").unwrap(), None);
        assert_eq!(enforce(MainClassLookup::Absent(Absence::NoAttribute), "m").unwrap(), None);
    }

    #[test]
    fn test_missing_class_name_message()
    {
        let lookup = MainClassLookup::Malformed(MalformedManifest::MissingClassName { line: 3 });
        let fatal = enforce(lookup, "/jar/META-INF/MANIFEST.MF").unwrap_err();
        assert_eq!(fatal.operation, "manifest_get_main");
        assert_eq!(
            fatal.to_string(),
            "manifest_get_main: Missing class name in manifest file /jar/META-INF/MANIFEST.MF"
        );
    }

    #[test]
    fn test_line_too_long_message()
    {
        let lookup = MainClassLookup::Malformed(MalformedManifest::LineTooLong { line: 2, max: 72 });
        let fatal = enforce(lookup, "MANIFEST.MF").unwrap_err();
        assert_eq!(fatal.status, ExitStatus::ManifestJar);
        assert!(fatal.message().contains("exceeds 72 bytes"));
    }
}
