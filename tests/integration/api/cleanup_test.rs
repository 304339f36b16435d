//! `GET /api/cleanup-data`

use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use dataqueue::backend::server::create_app_with_store;
use dataqueue::backend::store::{DocumentStore, MemoryCollection};
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::draft;
use crate::common::stores::FlakyStore;

fn cleanup_request() -> Request<Body> {
    Request::builder()
        .uri("/api/cleanup-data")
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_cleanup_empties_collection_then_is_idempotent() {
    let store = Arc::new(MemoryCollection::default());
    for i in 0..5 {
        store.add(draft(&format!("m{}", i), i)).await.unwrap();
    }
    let app = create_app_with_store(store.clone());

    let response = app.clone().oneshot(cleanup_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({"message": "Data deleted successfully"}));
    assert!(store.list().await.unwrap().is_empty());

    let response = app.oneshot(cleanup_request()).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_cleanup_read_failure_is_500() {
    let store = FlakyStore::default();
    store.fail_list.store(true, Ordering::SeqCst);
    let app = create_app_with_store(Arc::new(store));

    let response = app.oneshot(cleanup_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({"error": "Error Deleting Data"}));
}

#[tokio::test]
async fn test_cleanup_commit_failure_deletes_nothing() {
    let store = Arc::new(FlakyStore::default());
    store.add(draft("kept", 1)).await.unwrap();
    store.add(draft("also kept", 2)).await.unwrap();
    store.fail_delete.store(true, Ordering::SeqCst);
    let app = create_app_with_store(store.clone());

    let response = app.oneshot(cleanup_request()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(store.inner.len().await, 2);
}
