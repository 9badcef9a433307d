//! Tracing setup. One run is one short process, so the log file is opened once
//! and shared behind a mutex.

use anyhow::{Context, Result};
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn filter_or(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Append logs to `~/.local/state/pumlviz/pumlviz.log`.
/// Errors if the state dir is unusable; callers then use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pumlviz")?;
    let log_path = xdg_dirs
        .place_state_file("pumlviz.log")
        .context("creating pumlviz state directory")?;
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("opening {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter_or("info,pumlviz=debug,pumlviz_core=debug"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    tracing::debug!("logging to {}", log_path.display());
    Ok(())
}

/// Stderr-only logging at `warn`, so stdout carries nothing but the URL lines.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_or("warn"))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
