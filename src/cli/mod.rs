// src/cli/mod.rs
//! CLI command handlers.

pub mod args;
pub mod dispatch;
pub mod handlers;

pub use args::Cli;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` applies, defaulting to `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
