//! Common module for library exports

pub use crate::archive::{extract_manifest, resolve_jar};
pub use crate::config::ScanConfig;
pub use crate::error::{ManifestError, ManifestResult};
pub use crate::launch::{enforce, ExitStatus, FatalManifest};
pub use crate::manifest::{resolve_main_class, scan_main_class};
pub use crate::types::{Absence, MainClass, MainClassLookup, MalformedManifest};
