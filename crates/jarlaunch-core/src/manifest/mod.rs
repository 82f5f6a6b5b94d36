//! # Manifest Resolution
//!
//! Finds the `Main-Class` attribute of a JAR manifest that has already been
//! extracted to a plain file.
//!
//! Resolution is a straight pipeline run once per physical line:
//!
//! 1. **Source access**: open the file. If it cannot be opened the archive
//!    simply declares no entry point.
//! 2. **Line scanning**: read the next line into a [`LineBuffer`] bounded by
//!    [`ScanConfig::max_line_length`].
//! 3. **Attribute matching**: compare the start of the line against
//!    `Main-Class:`.
//! 4. **Value extraction**: take the whitespace-delimited value and copy it
//!    out as a [`MainClass`](crate::types::MainClass).
//!
//! The first matching line decides the outcome and scanning stops there.
//!
//! ## Limitations
//!
//! Only the `Main-Class` attribute is looked at. Other attributes, the
//! `Manifest-Version` header and continuation lines are ignored.
//!
//! ## Example
//!
//! ```rust,no_run
//! use jarlaunch_core::config::ScanConfig;
//! use jarlaunch_core::manifest::resolve_main_class;
//! use jarlaunch_core::types::MainClassLookup;
//!
//! match resolve_main_class("/tmp/app/META-INF/MANIFEST.MF", &ScanConfig::default())? {
//!     MainClassLookup::Found(class) => println!("entry point: {class}"),
//!     MainClassLookup::Absent(reason) => println!("not executable: {reason}"),
//!     MainClassLookup::Malformed(problem) => eprintln!("bad manifest: {problem}"),
//! }
//! # Ok::<(), jarlaunch_core::error::ManifestError>(())
//! ```

pub mod attribute;
pub mod scanner;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace, warn};

pub use self::attribute::{extract_main_class, matches_main_class, MAIN_CLASS_ATTRIBUTE};
pub use self::scanner::{Line, LineBuffer};
use crate::config::ScanConfig;
use crate::error::{ManifestError, ManifestResult};
use crate::types::{Absence, MainClassLookup, MalformedManifest};

/// Resolve the `Main-Class` of the manifest at `path`
///
/// ## Errors
///
/// - `InvalidArgument` if `path` is empty
/// - `Io` if reading fails after the file was opened
///
/// A missing or unreadable file is not an error; it resolves to
/// `Absent(Absence::NoManifest)`.
pub fn resolve_main_class(path: impl AsRef<Path>, config: &ScanConfig) -> ManifestResult<MainClassLookup>
{
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(ManifestError::InvalidArgument("manifest path is empty".to_string()));
    }

    let file = match open_manifest(path) {
        Some(file) => file,
        None => return Ok(MainClassLookup::Absent(Absence::NoManifest)),
    };

    let lookup = scan_main_class(BufReader::new(file), config)?;
    debug!(manifest = %path.display(), ?lookup, "Resolved manifest");
    Ok(lookup)
}

/// Open the manifest for reading, or `None` if it is not a readable file
fn open_manifest(path: &Path) -> Option<File>
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            debug!(manifest = %path.display(), "Manifest not opened: {e}");
            return None;
        }
    };

    match file.metadata() {
        Ok(meta) if meta.is_dir() => {
            debug!(manifest = %path.display(), "Manifest path is a directory");
            None
        }
        _ => Some(file),
    }
}

/// Scan an already opened manifest for its `Main-Class` attribute
///
/// This is the part of [`resolve_main_class`] that runs after the file has
/// been opened. It accepts any buffered reader, which makes it usable on
/// manifests held in memory.
///
/// ## Errors
///
/// Returns `Io` if the reader fails.
///
/// ## Example
///
/// ```rust
/// use std::io::Cursor;
///
/// use jarlaunch_core::config::ScanConfig;
/// use jarlaunch_core::manifest::scan_main_class;
///
/// let manifest = "Manifest-Version: 1.0\nMain-Class: com.acme.Main\n";
/// let lookup = scan_main_class(Cursor::new(manifest), &ScanConfig::default())?;
/// assert_eq!(lookup.main_class().map(|c| c.as_str()), Some("com.acme.Main"));
/// # Ok::<(), jarlaunch_core::error::ManifestError>(())
/// ```
pub fn scan_main_class<R: BufRead>(mut reader: R, config: &ScanConfig) -> ManifestResult<MainClassLookup>
{
    let mut buffer = LineBuffer::new(config.max_line_length());

    while let Some(line) = buffer.read_line(&mut reader)? {
        trace!(line = line.number, overlong = line.overlong, "Scanning manifest line");

        if !matches_main_class(line.bytes) {
            if line.overlong {
                warn!(
                    line = line.number,
                    max = config.max_line_length(),
                    "Skipping manifest line longer than the configured maximum"
                );
            }
            continue;
        }

        debug!(line = line.number, "Found Main-Class attribute");

        if line.overlong {
            return Ok(MainClassLookup::Malformed(MalformedManifest::LineTooLong {
                line: line.number,
                max: config.max_line_length(),
            }));
        }

        return Ok(match extract_main_class(line.bytes, line.number) {
            Ok(class) => MainClassLookup::Found(class),
            Err(problem) => MainClassLookup::Malformed(problem),
        });
    }

    Ok(MainClassLookup::Absent(Absence::NoAttribute))
}
