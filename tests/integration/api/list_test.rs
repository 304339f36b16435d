//! `GET /api/data`

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use dataqueue::backend::server::create_app_with_store;
use dataqueue::backend::store::{DocumentStore, MemoryCollection};
use dataqueue::shared::Record;
use tower::ServiceExt;

use crate::common::draft;
use crate::common::stores::FlakyStore;

#[tokio::test]
async fn test_list_is_newest_first() {
    let store = Arc::new(MemoryCollection::default());
    for (message, secs) in [("ten", 10), ("thirty", 30), ("twenty", 20)] {
        store.add(draft(message, secs)).await.unwrap();
    }
    let app = create_app_with_store(store);

    let response = app
        .oneshot(Request::builder().uri("/api/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let records: Vec<Record> = serde_json::from_slice(&bytes).unwrap();
    let messages: Vec<_> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["thirty", "twenty", "ten"]);
}

#[tokio::test]
async fn test_list_failure_is_500() {
    let app = create_app_with_store(Arc::new(FlakyStore::failing_everything()));

    let response = app
        .oneshot(Request::builder().uri("/api/data").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
