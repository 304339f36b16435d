//! `HttpApiClient` against a wiremock server

use dataqueue::egui_app::{ClientError, Config, HttpApiClient, IngestApi};
use dataqueue::shared::AppConfig;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{record, submission};

fn client_for(server: &MockServer) -> HttpApiClient {
    let config = Config::with_builder(AppConfig::builder().server_url(server.uri())).unwrap();
    HttpApiClient::new(config)
}

#[tokio::test]
async fn test_add_data_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/add-data"))
        .and(header("content-type", "application/json"))
        .and(body_partial_json(json!({
            "sender": "alice",
            "message": "queued",
            "sleepMs": 0,
            "timestampClient": "2023-11-14T22:13:20.000Z"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Data added successfully"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).add_data(&submission("queued")).await.unwrap();

    assert_eq!(response.message, "Data added successfully");
}

#[tokio::test]
async fn test_add_data_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/add-data"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Error Adding Data"})))
        .mount(&server)
        .await;

    let err = client_for(&server).add_data(&submission("x")).await.unwrap_err();

    match err {
        ClientError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error Adding Data");
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_cleanup_uses_get() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/cleanup-data"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Data deleted successfully"})))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).cleanup().await.unwrap();

    assert_eq!(response.message, "Data deleted successfully");
}

#[tokio::test]
async fn test_list_data() {
    let server = MockServer::start().await;
    let records = vec![record("b", "bob", 20), record("a", "alice", 10)];
    Mock::given(method("GET"))
        .and(path("/api/data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&records))
        .mount(&server)
        .await;

    let listed = client_for(&server).list_data().await.unwrap();

    assert_eq!(listed, records);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let config = Config::with_builder(AppConfig::builder().server_url("http://127.0.0.1:9")).unwrap();

    let err = HttpApiClient::new(config).cleanup().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)));
}
