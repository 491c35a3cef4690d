//! Logging CLI flags and subscriber installation.

use clap::Args;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Crates whose log output the level flags control.
const OUR_CRATES: &[&str] = &[
    "vidra",
    "actions",
    "config",
    "worker",
    "vidra_remote",
    "vidra_protocol",
    "keychord",
];

/// Logging controls for the CLI.
#[derive(Debug, Clone, Args)]
pub struct LogArgs {
    /// Set global log level to trace (our crates only)
    #[arg(long, conflicts_with_all = ["debug", "log_filter"])]
    pub trace: bool,

    /// Set global log level to debug (our crates only)
    #[arg(long, conflicts_with_all = ["trace", "log_filter"])]
    pub debug: bool,

    /// Full tracing filter spec, overriding the level flags
    #[arg(long, value_name = "SPEC")]
    pub log_filter: Option<String>,
}

/// Compute the effective filter spec from the CLI flags.
///
/// `--log-filter` wins outright; otherwise our crates get the selected level
/// and everything else stays at `warn`.
pub fn compute_spec(args: &LogArgs) -> String {
    if let Some(spec) = &args.log_filter {
        return spec.clone();
    }
    let level = if args.trace {
        "trace"
    } else if args.debug {
        "debug"
    } else {
        "info"
    };
    let mut spec = String::from("warn");
    for krate in OUR_CRATES {
        spec.push_str(&format!(",{krate}={level}"));
    }
    spec
}

/// Install the global subscriber: env filter plus compact output without
/// timestamps. `RUST_LOG` takes precedence over the CLI flags.
pub fn init(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(compute_spec(args)));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().without_time())
        .try_init()
        .ok();
}
