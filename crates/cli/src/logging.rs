//! Log initialization.
//!
//! Responsibilities:
//! - Create the log directory and open one log file per run.
//! - Mirror every event to stdout and to the file.
//!
//! Invariants:
//! - The returned [`WorkerGuard`] must outlive all logging; dropping it flushes
//!   the file writer.
//! - `RUST_LOG` overrides the default `info` level.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use jama_config::constants::LOG_FILE_PREFIX;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// File name for a run started at `started`, e.g. `field_sync_2026-03-02 14_11_08.log`.
pub fn log_file_name(started: DateTime<Local>) -> String {
    format!(
        "{}{}.log",
        LOG_FILE_PREFIX,
        started.format("%Y-%m-%d %H_%M_%S")
    )
}

/// Install the global subscriber. Returns the flush guard and the log file path.
pub fn init(log_dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_name = log_file_name(Local::now());
    let file_appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stdout))
        .with(fmt::layer().with_writer(file_writer).with_ansi(false))
        .try_init()
        .context("Failed to install log subscriber")?;

    Ok((guard, log_dir.join(file_name)))
}
