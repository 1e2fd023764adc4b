//! Global CLI arguments

use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Arguments that apply to the whole invocation
#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        global = true,
        help = "Increase output verbosity",
        long_help = "Increase output verbosity. Use multiple times for more detail:\n  \
-v:   info\n  \
-vv:  debug\n  \
-vvv: trace"
    )]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress all output except errors"
    )]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        env = "KEEL_CONFIG",
        value_name = "FILE",
        help = "Path to configuration file"
    )]
    pub config: Option<PathBuf>,
}
