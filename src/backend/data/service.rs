//! Ingest and cleanup operations against the document store.
//!
//! These functions hold the endpoint logic without any HTTP types, so the
//! handlers stay thin and the behaviour can be exercised directly.

use std::time::Duration;

use chrono::Utc;

use crate::backend::error::BackendError;
use crate::backend::store::DocumentStore;
use crate::shared::{AddDataRequest, Record, RecordDraft};

/// Parse a submission, wait out its artificial delay and append it
///
/// The server timestamp is taken after the delay, immediately before the
/// append.
pub async fn ingest(store: &dyn DocumentStore, body: &[u8]) -> Result<Record, BackendError> {
    let request: AddDataRequest = serde_json::from_slice(body)?;

    tracing::debug!(
        "[Ingest] Received message from '{}', sleeping {} ms",
        request.sender,
        request.sleep_ms
    );
    tokio::time::sleep(Duration::from_millis(request.sleep_ms)).await;

    let draft = RecordDraft {
        timestamp_client: request.timestamp_client.to_utc()?,
        timestamp_server: Utc::now(),
        sender: request.sender,
        message: request.message,
        sleep_ms: request.sleep_ms,
    };

    let record = store.add(draft).await?;
    tracing::info!("[Ingest] Stored record {}", record.id);
    Ok(record)
}

/// Delete every record present at the time of the read in one batch
///
/// Records appended between the read and the commit survive. Returns the
/// number of records deleted.
pub async fn cleanup(store: &dyn DocumentStore) -> Result<usize, BackendError> {
    let records = store.list().await?;
    if records.is_empty() {
        tracing::debug!("[Cleanup] Collection already empty");
        return Ok(0);
    }

    let ids: Vec<String> = records.into_iter().map(|record| record.id).collect();
    let requested = ids.len();
    let deleted = store.delete_batch(ids).await?;

    tracing::info!("[Cleanup] Deleted {} of {} records", deleted, requested);
    Ok(deleted)
}
