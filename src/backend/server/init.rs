/**
 * Server Initialization
 *
 * Builds the axum application:
 * 1. Load the document store (PostgreSQL or in-memory)
 * 2. Wrap it in `AppState`
 * 3. Create the router with every data route
 *
 * `create_app_with_store` skips step 1 so tests and embedders can supply
 * their own store.
 *
 * The shutdown token passed in is handed to every snapshot stream; cancelling
 * it ends those streams so graceful shutdown can complete.
 */

use axum::Router;
use tokio_util::sync::CancellationToken;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_store, ServerConfig};
use crate::backend::server::state::AppState;
use crate::backend::store::SharedStore;

/// Create and configure the axum application
///
/// A database that cannot be reached does not prevent start-up; the
/// server falls back to the in-memory store.
pub async fn create_app(config: &ServerConfig, shutdown: CancellationToken) -> Router<()> {
    tracing::info!("Initializing dataqueue backend server");

    let store = load_store(config).await;
    let app = create_app_with_shutdown(store, shutdown);

    tracing::info!("Router configured");
    app
}

/// Create the application around an existing store
///
/// Snapshot streams stay open until their clients disconnect.
pub fn create_app_with_store(store: SharedStore) -> Router<()> {
    create_app_with_shutdown(store, CancellationToken::new())
}

/// Create the application around an existing store and shutdown token
pub fn create_app_with_shutdown(store: SharedStore, shutdown: CancellationToken) -> Router<()> {
    create_router(AppState::new(store, shutdown))
}
