//! File-based tracing setup.
//!
//! The TUI owns the terminal, so logs go to a daily-rolled file under
//! `${ARKCHAT_HOME}/logs` instead of stderr. Filtering is controlled with
//! the `ARKCHAT_LOG` environment variable (standard `EnvFilter` syntax,
//! default `info`).

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::paths;

/// Environment variable controlling the log filter.
pub const LOG_FILTER_ENV: &str = "ARKCHAT_LOG";

/// Initializes the global tracing subscriber, writing to a rolling log file.
///
/// Returns the appender's worker guard. The caller must keep it alive for
/// the lifetime of the process or buffered log lines are dropped on exit.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = paths::log_dir();
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&log_dir, "arkchat.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .init();

    Ok(guard)
}
