//! File-only logging for the terminal UI.
//!
//! The TUI owns stdout/stderr, so every log line goes to
//! `<log root>/<run id>/client.log`.
use std::path::PathBuf;

use anyhow::{Context, Result};
use client_bootstrap::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "client.log";

/// Installs the global subscriber.
///
/// The returned guard flushes buffered lines on drop; keep it alive for the
/// whole run.
pub fn setup_logging(config: &LogConfig) -> Result<WorkerGuard> {
    // Pin the generated run id so the directory and the log line agree.
    let config = LogConfig {
        dir: Some(config.root_dir()),
        run_id: Some(config.run_id()),
    };
    let run_dir = prepare_run_dir(&config)?;

    let file_appender = tracing_appender::rolling::never(&run_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // ANSI stays on so `tail -f` shows colors
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("a global tracing subscriber is already installed")?;

    tracing::info!("Logging initialized: run={}", config.run_id());
    tracing::info!("Log file: {}", run_dir.join(LOG_FILE).display());

    Ok(guard)
}

/// Creates the per-run directory and returns its path.
pub fn prepare_run_dir(config: &LogConfig) -> Result<PathBuf> {
    let run_dir = config.run_dir();
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create log directory {}", run_dir.display()))?;
    Ok(run_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_nested_run_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let config = LogConfig {
            dir: Some(tmp.path().join("logs")),
            run_id: Some("run_42".into()),
        };

        let run_dir = prepare_run_dir(&config).unwrap();

        assert_eq!(run_dir, tmp.path().join("logs").join("run_42"));
        assert!(run_dir.is_dir());
    }
}
