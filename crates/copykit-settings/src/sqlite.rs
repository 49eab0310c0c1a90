//! SQLite-backed key-value store.
//!
//! # Design
//! - One `kv` table holding opaque string values; schema applied at connect.
//! - A single record written by a single operator: the pool serializes
//!   access, no further locking discipline is layered on top.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Row, SqlitePool};
use tracing::info;

use crate::error::{SettingsError, SettingsResult};
use crate::store::KeyValueStore;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS kv (key TEXT PRIMARY KEY, value TEXT NOT NULL)";

/// Key-value store backed by a SQLite database.
#[derive(Clone)]
pub struct SqliteKeyValueStore {
    pool: SqlitePool,
}

impl SqliteKeyValueStore {
    /// Open the database at `url`, creating it if missing, and apply the
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the schema
    /// cannot be applied.
    pub async fn connect(url: &str) -> SettingsResult<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|err| SettingsError::Database {
                operation: "kv.connect",
                source: err,
            })?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|err| SettingsError::Database {
                operation: "kv.connect",
                source: err,
            })?;
        sqlx::query(SCHEMA)
            .execute(&pool)
            .await
            .map_err(|err| SettingsError::Database {
                operation: "kv.schema",
                source: err,
            })?;
        info!(url, "settings store ready");
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub async fn in_memory() -> SettingsResult<Self> {
        Self::connect("sqlite::memory:").await
    }
}

#[async_trait]
impl KeyValueStore for SqliteKeyValueStore {
    async fn get(&self, key: &str) -> SettingsResult<Option<String>> {
        let row = sqlx::query("SELECT value FROM kv WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| SettingsError::Database {
                operation: "kv.get",
                source: err,
            })?;
        row.map(|row| {
            row.try_get::<String, _>("value")
                .map_err(|err| SettingsError::Database {
                    operation: "kv.get",
                    source: err,
                })
        })
        .transpose()
    }

    async fn put(&self, key: &str, value: &str) -> SettingsResult<()> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?1, ?2) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|err| SettingsError::Database {
            operation: "kv.put",
            source: err,
        })?;
        Ok(())
    }
}
