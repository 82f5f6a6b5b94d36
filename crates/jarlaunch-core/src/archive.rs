//! # Archive Extraction
//!
//! Pulls `META-INF/MANIFEST.MF` out of a JAR so the resolver can read it from
//! disk.
//!
//! Nothing about the archive is validated beyond what the `zip` crate needs to
//! locate the entry. A JAR without a manifest entry declares no entry point.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::config::ScanConfig;
use crate::error::{ManifestError, ManifestResult};
use crate::manifest::resolve_main_class;
use crate::types::{Absence, MainClassLookup};

/// Location of the manifest inside a JAR
pub const MANIFEST_ENTRY: &str = "META-INF/MANIFEST.MF";

/// Copy the manifest of `jar` to `dest_dir/META-INF/MANIFEST.MF`
///
/// Returns the path of the written file, or `None` if the archive has no
/// manifest entry.
///
/// ## Errors
///
/// - `InvalidArgument` if `jar` is empty
/// - `Archive` if `jar` cannot be read as a zip archive
/// - `Io` if the JAR cannot be opened or the manifest cannot be written
pub fn extract_manifest(jar: impl AsRef<Path>, dest_dir: impl AsRef<Path>) -> ManifestResult<Option<PathBuf>>
{
    let jar = jar.as_ref();
    if jar.as_os_str().is_empty() {
        return Err(ManifestError::InvalidArgument("archive path is empty".to_string()));
    }

    let archive_error = |source: ZipError| ManifestError::Archive {
        path: jar.to_path_buf(),
        source,
    };

    let mut archive = ZipArchive::new(File::open(jar)?).map_err(archive_error)?;
    let mut entry = match archive.by_name(MANIFEST_ENTRY) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            debug!(jar = %jar.display(), "Archive has no {MANIFEST_ENTRY}");
            return Ok(None);
        }
        Err(e) => return Err(archive_error(e)),
    };

    let target = dest_dir.as_ref().join(MANIFEST_ENTRY);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut out = File::create(&target)?;
    let written = io::copy(&mut entry, &mut out)?;
    debug!(jar = %jar.display(), manifest = %target.display(), bytes = written, "Extracted manifest");

    Ok(Some(target))
}

/// Extract the manifest of `jar` into a temporary directory and resolve it
///
/// The temporary directory is removed before this function returns. A JAR
/// without a manifest entry resolves to `Absent(Absence::NoManifest)`.
///
/// ## Errors
///
/// Same as [`extract_manifest`] and [`resolve_main_class`].
pub fn resolve_jar(jar: impl AsRef<Path>, config: &ScanConfig) -> ManifestResult<MainClassLookup>
{
    let scratch = tempfile::Builder::new().prefix("jarlaunch-").tempdir()?;
    resolve_jar_in(jar, scratch.path(), config)
}

/// Like [`resolve_jar`], but extracts into a caller-owned directory
///
/// The extracted manifest is left in `dest_dir`.
///
/// ## Errors
///
/// Same as [`extract_manifest`] and [`resolve_main_class`].
pub fn resolve_jar_in(jar: impl AsRef<Path>, dest_dir: impl AsRef<Path>, config: &ScanConfig) -> ManifestResult<MainClassLookup>
{
    match extract_manifest(jar, dest_dir)? {
        Some(manifest) => resolve_main_class(manifest, config),
        None => Ok(MainClassLookup::Absent(Absence::NoManifest)),
    }
}
