//! MySQL client for the externally-owned `user` table.
//!
//! # Responsibilities
//! - Open the connection pool from settings (startup-fatal on failure)
//! - List all user names
//! - Check a (name, password) credential pair
//!
//! The pool is internally synchronized; handlers share it by cloning.

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};

use crate::config::schema::MysqlConfig;
use crate::store::StoreResult;

/// Pooled handle to the relational store.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: MySqlPool,
}

impl UserStore {
    /// Open the pool eagerly. A connection failure here is unrecoverable
    /// and aborts startup.
    pub async fn connect(config: &MysqlConfig) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect(&config.dsn())
            .await?;
        Ok(Self { pool })
    }

    /// Build the pool without touching the network; the first query pays
    /// the connection cost. Used where an eager probe is undesirable.
    pub fn connect_lazy(config: &MysqlConfig) -> StoreResult<Self> {
        let pool = MySqlPoolOptions::new()
            .max_connections(5)
            .connect_lazy(&config.dsn())?;
        Ok(Self { pool })
    }

    /// All `name` values in the `user` table, in store-defined order.
    pub async fn list_user_names(&self) -> StoreResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM user")
            .fetch_all(&self.pool)
            .await?;
        Ok(names)
    }

    /// True iff a row matches both name and password.
    ///
    /// The comparison is a raw string equality performed by the store:
    /// passwords are plaintext, with no hashing and no timing-safe
    /// comparison. This matches the deployed `user` table and is insecure;
    /// do not reuse this scheme elsewhere.
    pub async fn check_auth(&self, name: &str, password: &str) -> StoreResult<bool> {
        let row = sqlx::query_scalar::<_, String>(
            "SELECT name FROM user WHERE name = ? AND password = ?",
        )
        .bind(name)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.is_some())
    }

    /// Drain the pool. Called exactly once at shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
