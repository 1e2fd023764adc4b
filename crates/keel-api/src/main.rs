//! # Keel
//!
//! Clean Architecture starter server.
//!
//! ## Startup sequence
//!
//! 1. Load `.env`, parse CLI arguments (clap handles `--help` / `--version`).
//! 2. Load configuration (defaults + file + env), apply flag overrides.
//! 3. Initialise the tracing subscriber (stderr, optional file appender).
//! 4. Wire the use cases and bind the listener.
//! 5. Serve until Ctrl+C / SIGTERM.
//! 6. Translate any [`ApiError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal;
use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use owo_colors::OwoColorize;
use tracing::debug;

use keel_api::cli::{Cli, GlobalArgs};
use keel_api::config::AppConfig;
use keel_api::error::{ApiError, ApiResult};
use keel_api::logging::init_logging;
use keel_api::server;
use keel_api::state::AppState;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before argument parsing so flags with env fallbacks see it.
    // Silently ignored if .env doesn't exist (production deployments use
    // real environment variables, not .env files).
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap renders --help / --version itself; keep its stream and exit
    // semantics (stdout, exit 0) while argument mistakes go to stderr
    // with exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                eprintln!("{}", e.render().ansi());
                return ExitCode::from(2);
            }
            print!("{}", e.render().ansi());
            return ExitCode::SUCCESS;
        }
    };

    // ── 2. Load configuration ─────────────────────────────────────────────
    // Logging is not up yet, so failures go through the error formatter.
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(mut config) => {
            config.apply_overrides(&cli.serve);
            config
        }
        Err(e) => return handle_error(&e, &cli.global),
    };

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    // The guard flushes the file appender on drop; hold it for the whole run.
    let _guard = match init_logging(&cli.global, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialise logging: {e}");
            return ExitCode::from(1);
        }
    };

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        host = %config.server.host,
        port = config.server.port,
        "keel starting"
    );

    // ── 4. + 5. Serve, 6. Error handling ──────────────────────────────────
    match run(&cli.global, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => handle_error(&e, &cli.global),
    }
}

/// Bind the listener, announce the address, serve until shutdown.
async fn run(global: &GlobalArgs, config: &AppConfig) -> ApiResult<()> {
    let addr = config.server.socket_addr()?;
    let listener = server::bind(addr).await?;

    // Port 0 resolves at bind time, so announce the actual address.
    let local = listener.local_addr()?;
    print_banner(local, global);

    let state = Arc::new(AppState::new());
    server::run(listener, state).await
}

/// Startup banner on stdout. Logs go to stderr, so this stays visible when
/// log output is redirected.
fn print_banner(addr: SocketAddr, global: &GlobalArgs) {
    if global.quiet {
        return;
    }

    let url = format!("http://{addr}");
    if !global.no_color && std::io::stdout().is_terminal() {
        println!(
            "{} v{} listening on {}",
            "keel".cyan().bold(),
            keel_api::VERSION,
            url.underline()
        );
    } else {
        println!("keel v{} listening on {url}", keel_api::VERSION);
    }
    println!("Press Ctrl+C to stop");
}

/// Translate an `ApiError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output and OS exit codes; the format/suggestion machinery in `ApiError`
/// is all exercised here.
fn handle_error(err: &ApiError, global: &GlobalArgs) -> ExitCode {
    // 1. Emit a structured log event at the right severity.
    err.log();

    // 2. Print a user-friendly message. Written straight to stderr so it
    //    appears even when stdout is redirected.
    let verbose = global.verbose > 0;
    let msg = if !global.no_color && std::io::stderr().is_terminal() {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
