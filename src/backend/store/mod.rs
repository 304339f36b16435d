//! Document Store
//!
//! The backend persists records in a schema-less collection behind the
//! `DocumentStore` trait. Two backends exist:
//!
//! - **`memory`** - an in-process collection, used when no database is
//!   configured and throughout the tests
//! - **`postgres`** - a PostgreSQL table accessed through sqlx, with change
//!   notifications delivered over `LISTEN`/`NOTIFY`
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs      - Trait, error type and snapshot alias
//! ├── memory.rs   - In-process collection
//! └── postgres.rs - PostgreSQL collection
//! ```
//!
//! # Real-time Snapshots
//!
//! Every store owns a `tokio::sync::broadcast` channel. After each change it
//! publishes the full collection as a `Snapshot`; `subscribe` hands out a
//! receiver for those snapshots.

use std::sync::Arc;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::shared::{Record, RecordDraft};

/// In-process collection
pub mod memory;

/// PostgreSQL collection
pub mod postgres;

pub use memory::MemoryCollection;
pub use postgres::PgCollection;

/// Full contents of the collection at one point in time
pub type Snapshot = Arc<Vec<Record>>;

/// Store handle shared across request handlers
pub type SharedStore = Arc<dyn DocumentStore>;

/// Errors raised by a document store
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store cannot serve requests right now
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The database rejected a query or the connection failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A value cannot be represented in the store's column type
    #[error("value out of range for '{field}': {value}")]
    OutOfRange { field: &'static str, value: String },
}

/// A collection of records supporting append, listing, atomic batch
/// deletion and real-time subscription
///
/// Records are never updated in place: the only mutations are `add` and
/// `delete_batch`.
pub trait DocumentStore: Send + Sync {
    /// Append a record; the store assigns its id
    fn add(&self, draft: RecordDraft) -> BoxFuture<'_, Result<Record, StoreError>>;

    /// Read every record in the collection
    fn list(&self) -> BoxFuture<'_, Result<Vec<Record>, StoreError>>;

    /// Delete the given records in one atomic operation
    ///
    /// Either every listed record that still exists is removed or none is.
    /// Ids that no longer exist are ignored. Returns the number of records
    /// removed.
    fn delete_batch(&self, ids: Vec<String>) -> BoxFuture<'_, Result<usize, StoreError>>;

    /// Receive a snapshot of the full collection after every change
    fn subscribe(&self) -> broadcast::Receiver<Snapshot>;
}
