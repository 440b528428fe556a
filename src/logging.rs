//! Structured logging setup
//!
//! `RUST_LOG` wins over the configured filter. Logs go to stderr, or to a
//! file for the full-screen interface where stderr would draw over the form.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor the config set one
pub const DEFAULT_FILTER: &str = "wordle_assist=warn";

fn env_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(configured.unwrap_or(DEFAULT_FILTER)))
}

/// Install a subscriber writing to stderr
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_stderr(configured: Option<&str>) -> Result<()> {
    tracing_subscriber::registry()
        .with(env_filter(configured))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install log subscriber")
}

/// Install a subscriber appending to `path`
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a global subscriber is
/// already installed.
pub fn init_file(path: &Path, configured: Option<&str>) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(env_filter(configured))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .try_init()
        .context("failed to install log subscriber")
}
