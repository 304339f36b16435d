//! # Local Database Module
//!
//! SQLite-backed key/value storage for UI state that must survive restarts:
//! the last sender name and the last successfully delivered submission.
//!
//! ## Key Components
//!
//! - `LocalStorage`: the get/set capability the rest of the client depends on
//! - `LocalDatabase`: the SQLite implementation
//! - `persisted.rs`: typed accessors for the `"sender"` and `"lastSend"` keys
//! - `sender_writer.rs`: ordered background writes of the sender name
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dataqueue::egui_app::local_db::{persisted, LocalDatabase};
//!
//! # async fn example() -> Result<(), dataqueue::egui_app::local_db::StorageError> {
//! let db = LocalDatabase::open("local.db").await?;
//! persisted::save_sender(&db, "alice").await?;
//! assert_eq!(persisted::load_sender(&db).await?, Some("alice".to_string()));
//! # Ok(())
//! # }
//! ```

pub mod persisted;
pub mod sender_writer;

pub use sender_writer::SenderWriter;

use std::path::Path;

use futures_util::future::BoxFuture;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors raised by local storage
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored value is not valid JSON for the expected type
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable string key/value storage
pub trait LocalStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>>;

    /// Store `value` under `key`, replacing any previous value
    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> BoxFuture<'a, Result<(), StorageError>>;
}

/// Local database connection manager
#[derive(Debug, Clone)]
pub struct LocalDatabase {
    pool: SqlitePool,
}

impl LocalDatabase {
    /// Open or create the database file at `path`
    ///
    /// Creates the parent directory if needed and uses WAL mode.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let database_url = format!("sqlite:{}?mode=rwc", path.to_string_lossy());
        let pool = SqlitePool::connect(&database_url).await?;

        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
        sqlx::query("PRAGMA synchronous=NORMAL").execute(&pool).await?;

        let db = Self { pool };
        db.init_schema().await?;

        tracing::info!("Local storage opened at {}", path.display());
        Ok(db)
    }

    /// Open a private in-memory database
    ///
    /// Limited to a single connection, since every SQLite connection to
    /// `:memory:` sees its own database.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let db = Self { pool };
        db.init_schema().await?;
        Ok(db)
    }

    async fn init_schema(&self) -> Result<(), StorageError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

impl LocalStorage for LocalDatabase {
    fn get<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StorageError>> {
        Box::pin(async move {
            let row: Option<(String,)> = sqlx::query_as("SELECT value FROM local_storage WHERE key = ?")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;
            Ok(row.map(|(value,)| value))
        })
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> BoxFuture<'a, Result<(), StorageError>> {
        Box::pin(async move {
            sqlx::query(
                "INSERT INTO local_storage (key, value, updated_at) VALUES (?, ?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            )
            .bind(key)
            .bind(value)
            .bind(chrono::Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;
            Ok(())
        })
    }
}
