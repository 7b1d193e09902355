//! Semantic validation of loaded settings.
//!
//! Serde handles syntactic checks; this module verifies the values make
//! sense before any connection is attempted. All errors are collected and
//! reported together, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::Settings;

/// A single semantic problem found in the settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingLogPath,
    InvalidBindAddress(String),
    MissingMysqlHost,
    InvalidMysqlPort(String),
    MissingMysqlDbname,
    MissingRedisAddr,
    InvalidRedisDb(i64),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingLogPath => write!(f, "log.filePath must not be empty"),
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "server.bind_address '{}' is not a valid socket address", addr)
            }
            ValidationError::MissingMysqlHost => write!(f, "mysql.host must not be empty"),
            ValidationError::InvalidMysqlPort(port) => {
                write!(f, "mysql.port '{}' is not a valid port number", port)
            }
            ValidationError::MissingMysqlDbname => write!(f, "mysql.dbname must not be empty"),
            ValidationError::MissingRedisAddr => write!(f, "redis.addr must not be empty"),
            ValidationError::InvalidRedisDb(db) => {
                write!(f, "redis.db {} is not a valid database index", db)
            }
        }
    }
}

/// Check the settings for semantic problems, returning every error found.
pub fn validate_settings(settings: &Settings) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if settings.log.file_path.is_empty() {
        errors.push(ValidationError::MissingLogPath);
    }
    if settings.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            settings.server.bind_address.clone(),
        ));
    }
    if settings.mysql.host.is_empty() {
        errors.push(ValidationError::MissingMysqlHost);
    }
    if settings.mysql.port.parse::<u16>().is_err() {
        errors.push(ValidationError::InvalidMysqlPort(settings.mysql.port.clone()));
    }
    if settings.mysql.dbname.is_empty() {
        errors.push(ValidationError::MissingMysqlDbname);
    }
    if settings.redis.addr.is_empty() {
        errors.push(ValidationError::MissingRedisAddr);
    }
    if settings.redis.db < 0 {
        errors.push(ValidationError::InvalidRedisDb(settings.redis.db));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
