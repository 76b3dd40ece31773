//! Command-line layer: argument parsing, subcommand handlers and logging setup.

pub mod commands;
pub mod parser;

use crate::errors::{AppError, AppResult};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v`/`-q` pick the level
/// (default: warn).
pub fn init_tracing(verbose: u8, quiet: u8) -> AppResult<()> {
    let default_level = if quiet >= 2 {
        "error"
    } else if quiet == 1 {
        "warn"
    } else if verbose >= 3 {
        "trace"
    } else if verbose == 2 {
        "debug"
    } else if verbose == 1 {
        "info"
    } else {
        "warn"
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Config(format!("invalid RUST_LOG / log filter: {e}")))?;

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();

    if let Err(err) = init_result {
        tracing::debug!(error = %err, "tracing subscriber already set, continuing");
    }

    Ok(())
}
