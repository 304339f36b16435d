//! Document stores for failure-path tests

use dataqueue::backend::store::{DocumentStore, MemoryCollection, Snapshot, StoreError};
use dataqueue::shared::{Record, RecordDraft};
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::broadcast;

/// Wraps a memory collection; individual operations can be made to fail
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryCollection,
    pub fail_add: AtomicBool,
    pub fail_list: AtomicBool,
    pub fail_delete: AtomicBool,
}

impl FlakyStore {
    pub fn failing_everything() -> Self {
        let store = Self::default();
        store.fail_add.store(true, Ordering::SeqCst);
        store.fail_list.store(true, Ordering::SeqCst);
        store.fail_delete.store(true, Ordering::SeqCst);
        store
    }
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("injected failure".to_string())
}

impl DocumentStore for FlakyStore {
    fn add(&self, draft: RecordDraft) -> BoxFuture<'_, Result<Record, StoreError>> {
        if self.fail_add.load(Ordering::SeqCst) {
            return Box::pin(async { Err(unavailable()) });
        }
        self.inner.add(draft)
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Record>, StoreError>> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Box::pin(async { Err(unavailable()) });
        }
        self.inner.list()
    }

    fn delete_batch(&self, ids: Vec<String>) -> BoxFuture<'_, Result<usize, StoreError>> {
        if self.fail_delete.load(Ordering::SeqCst) {
            return Box::pin(async { Err(unavailable()) });
        }
        self.inner.delete_batch(ids)
    }

    fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.inner.subscribe()
    }
}
