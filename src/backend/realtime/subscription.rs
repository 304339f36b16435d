/**
 * Snapshot Subscription Handler
 *
 * Implements `GET /api/data/subscribe`, a Server-Sent Events stream of
 * collection snapshots. The first event carries the collection as it is when
 * the client connects; every later event follows a change in the store.
 *
 * ```http
 * HTTP/1.1 200 OK
 * Content-Type: text/event-stream
 *
 * event: snapshot
 * data: [{"id":"...","sender":"alice",...}]
 * ```
 *
 * Keep-alive comments are injected by axum between snapshots. Lagged
 * receivers skip straight to the newest snapshot. Every stream ends when the
 * server's shutdown token is cancelled.
 */

use axum::{
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
};
use futures_util::stream::{self, Stream, StreamExt};
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_util::sync::CancellationToken;

use crate::backend::store::{SharedStore, Snapshot};
use crate::shared::api::SNAPSHOT_EVENT;
use crate::shared::Record;

/// Handle snapshot subscription (GET /api/data/subscribe)
pub async fn handle_data_subscription(
    State(store): State<SharedStore>,
    State(shutdown): State<CancellationToken>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    // Subscribe before reading so no change between the read and the first
    // recv is lost
    let rx = store.subscribe();

    let initial = match store.list().await {
        Ok(records) => Some(records),
        Err(e) => {
            tracing::warn!("[Realtime] Failed to read initial snapshot: {}", e);
            None
        }
    };

    tracing::info!("[Realtime] Subscription active");

    let stream = stream::unfold((initial, rx), |(initial, mut rx)| async move {
        if let Some(records) = initial {
            let event = snapshot_event(&records);
            return Some((event, (None, rx)));
        }

        let snapshot = next_snapshot(&mut rx).await?;
        let event = snapshot_event(&snapshot);
        Some((event, (None, rx)))
    })
    .take_until(shutdown.cancelled_owned());

    Sse::new(stream).keep_alive(KeepAlive::default())
}

async fn next_snapshot(rx: &mut broadcast::Receiver<Snapshot>) -> Option<Snapshot> {
    loop {
        match rx.recv().await {
            Ok(snapshot) => return Some(snapshot),
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("[Realtime] Receiver lagged, skipped {} snapshots", skipped);
            }
            Err(RecvError::Closed) => {
                tracing::info!("[Realtime] Snapshot channel closed, ending stream");
                return None;
            }
        }
    }
}

fn snapshot_event(records: &[Record]) -> Result<Event, axum::Error> {
    Event::default().event(SNAPSHOT_EVENT).json_data(records)
}
