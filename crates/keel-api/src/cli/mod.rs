//! Command-line interface for keel
//!
//! Keel is a single-purpose binary: it serves HTTP. There are no
//! subcommands, only flags that override the configured listen address
//! plus the usual global switches (verbosity, color, config path).

use clap::{Args, Parser};

mod global;

pub use global::GlobalArgs;

/// keel - Clean Architecture starter server
#[derive(Debug, Parser)]
#[command(
    name = "keel",
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = "Clean Architecture starter server",
    long_about = "Keel serves the starter's HTTP surface and shows how a request \
travels from the presentation layer through a use case into the domain.\n\n\
Configuration is resolved in order: built-in defaults, then the config file, \
then KEEL__* environment variables, then command-line flags.",
    after_help = "EXAMPLES:\n  \
keel                          Serve on the configured address\n  \
keel --port 8080              Override the listen port\n  \
keel --host 0.0.0.0 -vv       Listen on all interfaces with debug logging\n  \
KEEL__SERVER__PORT=9000 keel  Configure through the environment"
)]
pub struct Cli {
    #[command(flatten)]
    pub serve: ServeArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Flags that override the resolved server configuration
#[derive(Debug, Clone, Args)]
pub struct ServeArgs {
    /// Host to bind
    #[arg(
        long = "host",
        value_name = "HOST",
        help = "Host to bind (overrides config)"
    )]
    pub host: Option<String>,

    /// Port to bind
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        help = "Port to bind (overrides config)"
    )]
    pub port: Option<u16>,
}

// ============================================================================
// Tests
// ============================================================================
