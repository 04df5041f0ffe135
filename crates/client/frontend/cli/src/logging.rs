//! File-based tracing setup.
//!
//! The TUI owns stdout and stderr, so log output goes to a per-session file
//! instead; tail it with `tail -f` while the client runs.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

/// Keeps the non-blocking writer alive; drop it last.
pub struct LoggingGuard {
    _worker: WorkerGuard,
}

/// Initializes tracing into `<log dir>/<session>/client.log`.
pub fn init(config: &CliConfig) -> Result<LoggingGuard> {
    let session_id = config.session_id.clone().unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0);
        format!("session_{timestamp}")
    });

    let session_dir = log_directory(config).join(&session_id);
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("creating log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "client.log");
    let (writer, worker) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    tracing::info!(session = %session_id, dir = %session_dir.display(), "logging initialized");

    Ok(LoggingGuard { _worker: worker })
}

fn log_directory(config: &CliConfig) -> PathBuf {
    if let Some(dir) = &config.log_dir {
        return dir.clone();
    }
    directories::ProjectDirs::from("", "", "gloomward")
        .map(|dirs| dirs.data_local_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
