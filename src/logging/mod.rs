/*!
 * Logging Module
 * Centralized logging configuration and utilities
 */
pub mod config;
pub mod middleware;

use std::{io, path::Path};
use thiserror::Error;
use tracing_appender::{
    non_blocking,
    non_blocking::WorkerGuard,
    rolling::{InitError, RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter, Layer,
};

use crate::config::ServerConfig;
use self::config::LogSettings;

/// Writer guards; dropping them flushes and stops the background log threads.
#[must_use = "logs are lost once the guards are dropped"]
pub struct LogGuards {
    _guards: Vec<WorkerGuard>,
}

#[derive(Debug, Error)]
pub enum LogInitError {
    #[error("cannot create log directory {dir}: {source}")]
    Directory { dir: String, source: io::Error },

    #[error("cannot open log file: {0}")]
    Appender(#[from] InitError),

    #[error("global subscriber already set: {0}")]
    Subscriber(#[from] TryInitError),
}

fn daily_appender(dir: &Path, name: &str) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(name)
        .build(dir)
}

/// Initialize the logging system
pub fn init(server: &ServerConfig) -> Result<LogGuards, LogInitError> {
    let settings = LogSettings::from_config(server);

    std::fs::create_dir_all(&settings.dir).map_err(|source| LogInitError::Directory {
        dir: settings.dir.display().to_string(),
        source,
    })?;

    // File appender for all logs
    let (file_writer, file_guard) = non_blocking(daily_appender(&settings.dir, "app.log")?);

    // File appender for errors only
    let (error_writer, error_guard) = non_blocking(daily_appender(&settings.dir, "error.log")?);

    let (console_writer, console_guard) = non_blocking(io::stdout());

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.default_filter()));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if settings.production {
        // JSON format for production
        let file_layer = fmt::layer()
            .json()
            .with_writer(file_writer)
            .with_target(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_file(true)
            .with_line_number(true);

        let error_layer = fmt::layer()
            .json()
            .with_writer(error_writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(tracing_subscriber::filter::LevelFilter::ERROR);

        let console_layer = fmt::layer()
            .json()
            .with_writer(console_writer)
            .with_target(false);

        subscriber
            .with(file_layer)
            .with(error_layer)
            .with(console_layer)
            .try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_writer)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false);

        let error_layer = fmt::layer()
            .with_writer(error_writer)
            .with_target(true)
            .with_ansi(false)
            .with_filter(tracing_subscriber::filter::LevelFilter::ERROR);

        let console_layer = fmt::layer()
            .with_writer(console_writer)
            .with_target(true)
            .pretty();

        subscriber
            .with(file_layer)
            .with(error_layer)
            .with(console_layer)
            .try_init()?;
    }

    tracing::info!(
        environment = %server.environment,
        level = %settings.level,
        dir = %settings.dir.display(),
        "logging initialized"
    );

    Ok(LogGuards {
        _guards: vec![file_guard, error_guard, console_guard],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_dir_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let config = ServerConfig {
            log_dir: blocker.join("logs"),
            ..ServerConfig::default()
        };

        let result = init(&config);
        assert!(matches!(result, Err(LogInitError::Directory { .. })));
    }

    #[test]
    fn test_init_creates_log_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");
        let config = ServerConfig {
            log_dir: dir.clone(),
            ..ServerConfig::default()
        };

        // Only this test installs the global subscriber.
        let guards = init(&config).unwrap();
        assert!(dir.is_dir());
        drop(guards);
    }
}
