//! Store clients for the two external databases.
//!
//! Both handles are built once at startup, shared by cloning across all
//! concurrent request handlers, and never reassigned. Query faults are
//! returned as typed errors so a store hiccup is scoped to the failing
//! request instead of taking the process down.

pub mod mysql;
pub mod redis;

use thiserror::Error;

/// Errors from either backing store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// MySQL connection or query failure.
    #[error("mysql error: {0}")]
    Mysql(#[from] sqlx::Error),

    /// Redis connection or command failure.
    #[error("redis error: {0}")]
    Redis(#[from] ::redis::RedisError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
