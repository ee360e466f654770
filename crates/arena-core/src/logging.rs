//! Tracing setup.
//!
//! Logs go to a file under the arena home directory, never stdout: the TUI
//! owns the terminal. Filtering via the `ARENA_LOG` environment variable
//! (`info` by default).

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Returns the appender guard; dropping it flushes buffered log lines, so
/// the caller must hold it for the lifetime of the process.
pub fn init(home: &Path) -> Result<WorkerGuard> {
    let dir = home.join("logs");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, "arena.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("ARENA_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
