//! `GET /api/data/subscribe` driven through the router

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use dataqueue::backend::server::create_app_with_store;
use dataqueue::backend::store::{DocumentStore, MemoryCollection};
use dataqueue::egui_app::realtime::{SseDecoder, SseEvent};
use dataqueue::shared::Record;
use futures_util::StreamExt;
use tokio::time::timeout;
use tower::ServiceExt;

use crate::common::draft;

/// Read from the body until the decoder yields a snapshot event
async fn next_snapshot<S>(stream: &mut S, decoder: &mut SseDecoder) -> Vec<Record>
where
    S: futures_util::Stream<Item = Result<axum::body::Bytes, axum::Error>> + Unpin,
{
    loop {
        let chunk = timeout(Duration::from_secs(2), stream.next())
            .await
            .expect("timed out waiting for a snapshot")
            .expect("stream ended")
            .expect("body error");

        let events: Vec<SseEvent> = decoder.push(&chunk);
        if let Some(event) = events.into_iter().find(|e| e.event == "snapshot") {
            return serde_json::from_str(&event.data).unwrap();
        }
    }
}

#[tokio::test]
async fn test_subscription_sends_initial_snapshot_then_changes() {
    let store = Arc::new(MemoryCollection::default());
    store.add(draft("existing", 1)).await.unwrap();
    let app = create_app_with_store(store.clone());

    let response = app
        .oneshot(Request::builder().uri("/api/data/subscribe").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").and_then(|v| v.to_str().ok()),
        Some("text/event-stream")
    );

    let mut stream = response.into_body().into_data_stream();
    let mut decoder = SseDecoder::new();

    let initial = next_snapshot(&mut stream, &mut decoder).await;
    assert_eq!(initial.len(), 1);
    assert_eq!(initial[0].message, "existing");

    store.add(draft("fresh", 2)).await.unwrap();
    let after_add = next_snapshot(&mut stream, &mut decoder).await;
    assert_eq!(after_add.len(), 2);

    let ids = after_add.into_iter().map(|r| r.id).collect();
    store.delete_batch(ids).await.unwrap();
    let after_cleanup = next_snapshot(&mut stream, &mut decoder).await;
    assert!(after_cleanup.is_empty());
}
