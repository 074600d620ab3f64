//! Logging setup.
//!
//! The terminal belongs to the progress bars, so records go to
//! `$XDG_STATE_HOME/ctfdl/ctfdl.log` unless that cannot be opened. `RUST_LOG`
//! wins over the `-v` count when set.

use anyhow::{anyhow, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "ctfdl.log";

/// Default directive for a `-v` count: 0 → warn, 1 → info, 2+ → debug.
pub fn filter_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn env_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_for_verbosity(verbosity)))
}

/// Appends structured records to the state-dir log file. Returns `Err` when
/// the file cannot be opened so the caller can use [`init_logging_stderr`].
pub fn init_logging(verbosity: u8) -> Result<()> {
    let path = xdg::BaseDirectories::with_prefix("ctfdl")?.place_state_file(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("{}", e))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

/// Fallback: same filter, records on stderr.
pub fn init_logging_stderr(verbosity: u8) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
