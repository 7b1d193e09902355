//! Structured logging setup.
//!
//! Wires the tracing registry to two sinks: a JSON-formatted append-only
//! file at the configured path and a human-readable stdout layer. HTTP
//! access lines (tower-http's `TraceLayer`) flow through the same
//! subscriber, so they reach both sinks.

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::LogConfig;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    OpenLogFile {
        path: String,
        source: std::io::Error,
    },
}

/// Open the log file in append mode, creating it if absent.
pub fn open_log_file(path: &str) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::OpenLogFile {
            path: path.to_string(),
            source,
        })
}

/// Install the global subscriber. Must be called once, before any store is
/// opened; an unopenable log file aborts startup.
pub fn init(config: &LogConfig) -> Result<(), LoggingError> {
    let log_file = open_log_file(&config.file_path)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,iam_service=debug,tower_http=debug".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(log_file)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
