use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use jarlaunch_core::archive::{resolve_jar, resolve_jar_in, MANIFEST_ENTRY};
use jarlaunch_core::launch::{enforce, ExitStatus, FatalManifest};
use jarlaunch_core::{resolve_main_class, MainClass, MainClassLookup, ManifestError, ScanConfig};
use jarlaunch_utils::{debug, init_logging, init_logging_with_level, LogFormat, LogLevel, LoggingError, LoggingGuard};

/// Resolve the Main-Class entry point of a JAR file or extracted manifest.
#[derive(Parser, Debug)]
#[command(name = "jarlaunch")]
#[command(version)]
#[command(about = "Resolve the Main-Class entry point of a JAR file or extracted manifest", long_about = None)]
struct Cli
{
    #[command(subcommand)]
    command: Commands,

    /// Maximum manifest line length in bytes (overrides JARLAUNCH_MANIFEST_LINE_MAX)
    #[arg(long, global = true)]
    max_line_length: Option<usize>,

    /// Log level: error, warn, info, debug or trace (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Log format: pretty or json (overrides JARLAUNCH_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<LogFormat>,
}

#[derive(Subcommand, Debug)]
enum Commands
{
    /// Resolve Main-Class from a manifest file already extracted to disk
    Manifest
    {
        /// Path to the manifest file (usually META-INF/MANIFEST.MF)
        path: PathBuf,
        /// Print the slash-separated internal name (com/acme/Main)
        #[arg(long, default_value_t = false)]
        internal: bool,
    },
    /// Extract the manifest from a JAR and resolve its Main-Class
    Jar
    {
        /// Path to the JAR file
        jar: PathBuf,
        /// Print the slash-separated internal name (com/acme/Main)
        #[arg(long, default_value_t = false)]
        internal: bool,
        /// Keep the extracted manifest in this directory instead of a temporary one
        #[arg(long)]
        extract_dir: Option<PathBuf>,
    },
}

/// Ways a command can end other than printing a class name
#[derive(Debug, thiserror::Error)]
enum CommandError
{
    #[error(transparent)]
    Fatal(#[from] FatalManifest),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

fn main()
{
    let cli = Cli::parse();

    let guard = match init_cli_logging(cli.log_level, cli.log_format) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(ExitStatus::Failure.code());
        }
    };

    let status = match run_command(cli) {
        Ok(()) => ExitStatus::Success,
        Err(CommandError::Fatal(fatal)) => {
            eprintln!("{}", fatal);
            fatal.status
        }
        Err(CommandError::Manifest(e)) => {
            eprintln!("Error: {}", e);
            ExitStatus::Failure
        }
    };

    // Flush file logging before exiting
    drop(guard);
    process::exit(status.code());
}

fn init_cli_logging(level: Option<LogLevel>, format: Option<LogFormat>) -> Result<LoggingGuard, LoggingError>
{
    match (level, format) {
        (None, None) => init_logging(),
        (level, format) => init_logging_with_level(level.unwrap_or(LogLevel::Info), format.unwrap_or(LogFormat::Pretty)),
    }
}

fn scan_config(max_line_length: Option<usize>) -> Result<ScanConfig, ManifestError>
{
    let config = ScanConfig::from_env()?;
    match max_line_length {
        Some(max) => config.with_max_line_length(max),
        None => Ok(config),
    }
}

fn run_command(cli: Cli) -> Result<(), CommandError>
{
    let config = scan_config(cli.max_line_length)?;
    debug!(max_line_length = config.max_line_length(), "Scan configuration");

    match cli.command {
        Commands::Manifest { path, internal } => {
            let lookup = resolve_main_class(&path, &config)?;
            report(lookup, &path, internal)
        }
        Commands::Jar {
            jar,
            internal,
            extract_dir,
        } => {
            let (lookup, manifest) = match extract_dir {
                Some(dir) => (resolve_jar_in(&jar, &dir, &config)?, dir.join(MANIFEST_ENTRY)),
                None => (resolve_jar(&jar, &config)?, jar.join(MANIFEST_ENTRY)),
            };
            report(lookup, &manifest, internal)
        }
    }
}

fn report(lookup: MainClassLookup, manifest: &Path, internal: bool) -> Result<(), CommandError>
{
    if let Some(class) = enforce(lookup, manifest)? {
        println!("{}", display_name(&class, internal));
    }
    Ok(())
}

fn display_name(class: &MainClass, internal: bool) -> String
{
    if internal {
        class.internal_name()
    } else {
        class.to_string()
    }
}
