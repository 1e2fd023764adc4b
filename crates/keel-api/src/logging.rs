//! Logging configuration for the server
//!
//! Uses tracing for structured logging. Level comes from CLI flags unless
//! `RUST_LOG` is set, output goes to stderr, and an optional non-blocking
//! file appender is added when `[logging].directory` is configured.

use crate::cli::GlobalArgs;
use crate::config::LoggingConfig;
use anyhow::Result;
use std::io::IsTerminal;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging system.
///
/// Returns the worker guard for the file appender when one is configured.
/// The guard must stay alive for the life of the process, otherwise buffered
/// lines are dropped on shutdown.
pub fn init_logging(args: &GlobalArgs, config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let level = derive_level(args);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "keel_api={level},keel_core={level},keel_adapters={level}"
        ))
    });

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi);

    let (file_layer, guard) = match &config.directory {
        Some(directory) => {
            std::fs::create_dir_all(directory)?;
            let appender = tracing_appender::rolling::daily(directory, "keel.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}

/// Derive the log level from verbosity flags
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }

    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

// ============================================================================
// Tests
// ============================================================================
