//! Example showing library use of the resolver with logging enabled
//!
//! Run with a manifest path:
//!
//! ```text
//! RUST_LOG=trace cargo run --example resolve_with_logging -- path/to/MANIFEST.MF
//! ```
//!
//! Set `JARLAUNCH_LOG_FORMAT=json` for JSON output.

use jarlaunch_core::launch::enforce;
use jarlaunch_core::{resolve_main_class, ScanConfig};
use jarlaunch_utils::init_logging;

fn main()
{
    let _logging = init_logging().expect("Failed to initialize logging");

    let Some(path) = std::env::args().nth(1) else {
        tracing::error!("usage: resolve_with_logging <MANIFEST>");
        return;
    };

    let span = tracing::span!(tracing::Level::INFO, "resolve", manifest = %path);
    let _guard = span.enter();

    let config = ScanConfig::from_env().expect("Invalid JARLAUNCH_MANIFEST_LINE_MAX");
    let lookup = match resolve_main_class(&path, &config) {
        Ok(lookup) => lookup,
        Err(e) => {
            tracing::error!(error = %e, "Resolution failed");
            return;
        }
    };

    match enforce(lookup, &path) {
        Ok(Some(class)) => tracing::info!(class = %class, internal = %class.internal_name(), "Entry point"),
        Ok(None) => tracing::info!("Archive is a library"),
        Err(fatal) => tracing::error!(status = %fatal.status, "{fatal}"),
    }
}
