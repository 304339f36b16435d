//! Graceful shutdown with an open snapshot stream

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use dataqueue::backend::server::create_app_with_shutdown;
use dataqueue::backend::store::MemoryCollection;
use futures_util::StreamExt;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

#[tokio::test]
async fn test_server_stops_while_client_is_subscribed() {
    let shutdown = CancellationToken::new();
    let app = create_app_with_shutdown(Arc::new(MemoryCollection::default()), shutdown.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown.clone().cancelled_owned())
            .into_future(),
    );

    let response = reqwest::get(format!("http://{}/api/data/subscribe", addr))
        .await
        .unwrap();
    let mut body = response.bytes_stream();

    let first = timeout(Duration::from_secs(2), body.next())
        .await
        .expect("timed out waiting for the initial snapshot")
        .expect("stream ended before the initial snapshot")
        .unwrap();
    assert!(String::from_utf8_lossy(&first).contains("event: snapshot"));

    shutdown.cancel();

    let finished = timeout(Duration::from_secs(5), server).await;
    assert!(finished.is_ok(), "server did not stop after the shutdown signal");
    assert_ok!(finished.unwrap().unwrap());

    // The stream itself is closed rather than left hanging
    let rest = timeout(Duration::from_secs(2), async {
        while let Some(chunk) = body.next().await {
            if chunk.is_err() {
                break;
            }
        }
    })
    .await;
    assert!(rest.is_ok());
}

#[tokio::test]
async fn test_subscription_opened_after_shutdown_ends_immediately() {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    let shutdown = CancellationToken::new();
    shutdown.cancel();
    let app = create_app_with_shutdown(Arc::new(MemoryCollection::default()), shutdown);

    let response = app
        .oneshot(Request::builder().uri("/api/data/subscribe").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let bytes = timeout(Duration::from_secs(2), axum::body::to_bytes(response.into_body(), usize::MAX))
        .await
        .expect("stream did not end after shutdown")
        .unwrap();
    assert!(bytes.is_empty());
}
