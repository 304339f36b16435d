/**
 * In-Memory Collection
 *
 * Holds records in insertion order behind a `tokio::sync::RwLock`. Snapshots
 * are published while the write lock is still held, so subscribers observe
 * changes in the order they were applied.
 */

use std::collections::HashSet;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::sync::{broadcast, RwLock};
use uuid::Uuid;

use crate::backend::realtime::broadcast::{publish_snapshot, SnapshotBroadcast};
use crate::backend::store::{DocumentStore, Snapshot, StoreError};
use crate::shared::{Record, RecordDraft};

/// Collection kept in process memory
#[derive(Debug)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Record>>,
    broadcast: SnapshotBroadcast,
}

impl MemoryCollection {
    /// Create an empty collection whose snapshot channel buffers `capacity`
    /// snapshots per subscriber
    pub fn new(capacity: usize) -> Self {
        let (broadcast, _) = broadcast::channel(capacity.max(1));
        Self {
            documents: RwLock::new(Vec::new()),
            broadcast,
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

impl Default for MemoryCollection {
    fn default() -> Self {
        Self::new(64)
    }
}

impl DocumentStore for MemoryCollection {
    fn add(&self, draft: RecordDraft) -> BoxFuture<'_, Result<Record, StoreError>> {
        async move {
            let record = draft.into_record(Uuid::new_v4().to_string());

            let mut documents = self.documents.write().await;
            documents.push(record.clone());
            publish_snapshot(&self.broadcast, Arc::new(documents.clone()));

            Ok(record)
        }
        .boxed()
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Record>, StoreError>> {
        async move { Ok(self.documents.read().await.clone()) }.boxed()
    }

    fn delete_batch(&self, ids: Vec<String>) -> BoxFuture<'_, Result<usize, StoreError>> {
        async move {
            let doomed: HashSet<String> = ids.into_iter().collect();

            let mut documents = self.documents.write().await;
            let before = documents.len();
            documents.retain(|record| !doomed.contains(&record.id));
            let removed = before - documents.len();

            if removed > 0 {
                publish_snapshot(&self.broadcast, Arc::new(documents.clone()));
            }

            Ok(removed)
        }
        .boxed()
    }

    fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.broadcast.subscribe()
    }
}
