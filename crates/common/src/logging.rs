//! Logging setup using `tracing-subscriber` and `tracing-appender`.
//!
//! Each run gets a console layer (level from `RUST_LOG`, falling back to the
//! configured `log_level`) and a plain-text DEBUG file layer written to
//! `{log_dir}/test_execution_YYYYMMDD_HHMMSS.log`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use crate::config::Settings;
use crate::TIMESTAMP_FORMAT;

/// Keeps the non-blocking file writer alive.
///
/// Dropping it flushes pending log lines and closes the file.
pub struct LogGuard {
    _guard: WorkerGuard,
    path: PathBuf,
    installed: bool,
}

impl LogGuard {
    /// Path of this run's log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// False when another subscriber was already installed for the process
    pub fn installed(&self) -> bool {
        self.installed
    }
}

/// Log file name for a run started at `now`
pub fn log_file_name(now: DateTime<Local>) -> String {
    format!("test_execution_{}.log", now.format(TIMESTAMP_FORMAT))
}

/// Initialise console + file logging for a test run.
///
/// Calling this when a global subscriber already exists is not an error: the
/// existing subscriber keeps receiving events and the returned guard reports
/// `installed() == false`.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created.
pub fn init(settings: &Settings) -> anyhow::Result<LogGuard> {
    let log_dir = &settings.artifacts.log_dir;
    std::fs::create_dir_all(log_dir).map_err(|e| {
        anyhow::anyhow!("failed to create log directory {}: {e}", log_dir.display())
    })?;

    let file_name = log_file_name(Local::now());
    let path = log_dir.join(&file_name);

    let file_appender = tracing_appender::rolling::never(log_dir, &file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer().with_target(true).with_filter(console_filter);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(non_blocking)
        .with_filter(LevelFilter::DEBUG);

    let installed = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logging to {}", path.display());
    } else {
        tracing::debug!("Global subscriber already set; {} stays empty", path.display());
    }

    Ok(LogGuard {
        _guard: guard,
        path,
        installed,
    })
}
