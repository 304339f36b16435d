/**
 * PostgreSQL Collection
 *
 * Stores records in the `data` table. Every mutation runs in a transaction
 * that also issues `pg_notify` on the `data_changes` channel, so each server
 * instance connected to the database learns about the change. A background
 * task listens on that channel, re-reads the table and publishes a fresh
 * snapshot to local subscribers.
 */

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use sqlx::postgres::PgListener;
use sqlx::PgPool;
use tokio::sync::broadcast;
use uuid::Uuid;

use crate::backend::realtime::broadcast::{publish_snapshot, SnapshotBroadcast};
use crate::backend::store::{DocumentStore, Snapshot, StoreError};
use crate::shared::{Record, RecordDraft};

/// Notification channel used to announce collection changes
pub const CHANGE_CHANNEL: &str = "data_changes";

/// Collection backed by a PostgreSQL table
#[derive(Debug, Clone)]
pub struct PgCollection {
    pool: PgPool,
    broadcast: SnapshotBroadcast,
}

#[derive(sqlx::FromRow)]
struct DataRow {
    id: String,
    sender: String,
    message: String,
    sleep_ms: i64,
    timestamp_client: DateTime<Utc>,
    timestamp_server: DateTime<Utc>,
}

impl TryFrom<DataRow> for Record {
    type Error = StoreError;

    fn try_from(row: DataRow) -> Result<Self, Self::Error> {
        let sleep_ms = u64::try_from(row.sleep_ms).map_err(|_| StoreError::OutOfRange {
            field: "sleep_ms",
            value: row.sleep_ms.to_string(),
        })?;

        Ok(Record {
            id: row.id,
            sender: row.sender,
            message: row.message,
            sleep_ms,
            timestamp_client: row.timestamp_client,
            timestamp_server: row.timestamp_server,
        })
    }
}

/// `sleep_ms` as stored in the `BIGINT` column
fn sleep_ms_column(sleep_ms: u64) -> Result<i64, StoreError> {
    i64::try_from(sleep_ms).map_err(|_| StoreError::OutOfRange {
        field: "sleep_ms",
        value: sleep_ms.to_string(),
    })
}

impl PgCollection {
    /// Start listening for change notifications and return the collection
    ///
    /// # Errors
    ///
    /// Fails if the notification listener cannot connect.
    pub async fn connect(pool: PgPool, capacity: usize) -> Result<Self, StoreError> {
        let mut listener = PgListener::connect_with(&pool).await?;
        listener.listen(CHANGE_CHANNEL).await?;

        let (broadcast, _) = broadcast::channel(capacity.max(1));
        tokio::spawn(forward_changes(listener, pool.clone(), broadcast.clone()));

        tracing::info!("[Store] Listening for changes on channel '{}'", CHANGE_CHANNEL);
        Ok(Self { pool, broadcast })
    }
}

impl DocumentStore for PgCollection {
    fn add(&self, draft: RecordDraft) -> BoxFuture<'_, Result<Record, StoreError>> {
        async move {
            let record = draft.into_record(Uuid::new_v4().to_string());
            let sleep_ms = sleep_ms_column(record.sleep_ms)?;

            let mut tx = self.pool.begin().await?;
            sqlx::query(
                r#"
                INSERT INTO data (id, sender, message, sleep_ms, timestamp_client, timestamp_server)
                VALUES ($1, $2, $3, $4, $5, $6)
                "#,
            )
            .bind(&record.id)
            .bind(&record.sender)
            .bind(&record.message)
            .bind(sleep_ms)
            .bind(record.timestamp_client)
            .bind(record.timestamp_server)
            .execute(&mut *tx)
            .await?;

            notify_change(&mut tx, &record.id).await?;
            tx.commit().await?;

            Ok(record)
        }
        .boxed()
    }

    fn list(&self) -> BoxFuture<'_, Result<Vec<Record>, StoreError>> {
        async move { fetch_all(&self.pool).await }.boxed()
    }

    fn delete_batch(&self, ids: Vec<String>) -> BoxFuture<'_, Result<usize, StoreError>> {
        async move {
            if ids.is_empty() {
                return Ok(0);
            }

            let mut tx = self.pool.begin().await?;
            let result = sqlx::query("DELETE FROM data WHERE id = ANY($1)")
                .bind(&ids)
                .execute(&mut *tx)
                .await?;

            let removed = result.rows_affected() as usize;
            if removed > 0 {
                notify_change(&mut tx, "batch-delete").await?;
            }
            tx.commit().await?;

            Ok(removed)
        }
        .boxed()
    }

    fn subscribe(&self) -> broadcast::Receiver<Snapshot> {
        self.broadcast.subscribe()
    }
}

async fn notify_change(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    payload: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_notify($1, $2)")
        .bind(CHANGE_CHANNEL)
        .bind(payload)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

async fn fetch_all(pool: &PgPool) -> Result<Vec<Record>, StoreError> {
    let rows = sqlx::query_as::<_, DataRow>(
        r#"
        SELECT id, sender, message, sleep_ms, timestamp_client, timestamp_server
        FROM data
        ORDER BY timestamp_server DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Record::try_from).collect()
}

/// Re-read the table after each notification and publish the snapshot
async fn forward_changes(mut listener: PgListener, pool: PgPool, broadcast: SnapshotBroadcast) {
    loop {
        match listener.recv().await {
            Ok(notification) => {
                tracing::debug!("[Store] Change notification: {}", notification.payload());
                if broadcast.receiver_count() == 0 {
                    continue;
                }
                match fetch_all(&pool).await {
                    Ok(records) => {
                        publish_snapshot(&broadcast, Arc::new(records));
                    }
                    Err(e) => {
                        tracing::warn!("[Store] Failed to read snapshot after change: {}", e);
                    }
                }
            }
            Err(e) => {
                tracing::warn!("[Store] Change listener error (will retry): {}", e);
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}
