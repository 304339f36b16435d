//! `POST /api/add-data`

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use chrono::Utc;
use dataqueue::backend::server::create_app_with_store;
use dataqueue::backend::store::{DocumentStore, MemoryCollection};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::common::stores::FlakyStore;

fn add_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/add-data")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_add_data_stores_exactly_one_record() {
    let store = Arc::new(MemoryCollection::default());
    let app = create_app_with_store(store.clone());
    let arrival = Utc::now();

    let response = app
        .oneshot(add_request(json!({
            "sender": "alice",
            "message": "hello",
            "sleepMs": 0,
            "timestampClient": "2024-01-15T10:30:00.000Z"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(json_body(response).await, json!({"message": "Data added successfully"}));

    let records = store.list().await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!((record.sender.as_str(), record.message.as_str(), record.sleep_ms), ("alice", "hello", 0));
    assert_eq!(record.timestamp_client.to_rfc3339(), "2024-01-15T10:30:00+00:00");
    assert!(record.timestamp_server >= arrival);
    assert!(!record.id.is_empty());
}

#[tokio::test]
async fn test_add_data_accepts_epoch_millis() {
    let store = Arc::new(MemoryCollection::default());
    let app = create_app_with_store(store.clone());

    let response = app
        .oneshot(add_request(json!({
            "sender": "bob",
            "message": "epoch",
            "sleepMs": 0,
            "timestampClient": 1_705_314_600_000i64
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let records = store.list().await.unwrap();
    assert_eq!(records[0].timestamp_client.timestamp_millis(), 1_705_314_600_000);
}

#[tokio::test]
async fn test_add_data_waits_for_sleep_ms() {
    let app = create_app_with_store(Arc::new(MemoryCollection::default()));
    let started = Instant::now();

    let response = app
        .oneshot(add_request(json!({
            "sender": "alice",
            "message": "slow",
            "sleepMs": 500,
            "timestampClient": "2024-01-15T10:30:00Z"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_duration_between!(started.elapsed(), Duration::from_millis(500), Duration::from_secs(5));
}

#[tokio::test]
async fn test_malformed_body_is_500() {
    let store = Arc::new(MemoryCollection::default());
    let app = create_app_with_store(store.clone());

    let response = app
        .oneshot(add_request(json!({"sender": "alice", "sleepMs": "soon"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({"error": "Error Adding Data"}));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_negative_sleep_is_rejected() {
    let app = create_app_with_store(Arc::new(MemoryCollection::default()));

    let response = app
        .oneshot(add_request(json!({
            "sender": "alice",
            "message": "back in time",
            "sleepMs": -1,
            "timestampClient": "2024-01-15T10:30:00Z"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_store_failure_is_500() {
    let app = create_app_with_store(Arc::new(FlakyStore::failing_everything()));

    let response = app
        .oneshot(add_request(json!({
            "sender": "alice",
            "message": "lost",
            "sleepMs": 0,
            "timestampClient": "2024-01-15T10:30:00Z"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await, json!({"error": "Error Adding Data"}));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_app_with_store(Arc::new(MemoryCollection::default()));

    let response = app
        .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
