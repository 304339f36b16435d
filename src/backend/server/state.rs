/**
 * Application State Management
 *
 * `AppState` is the central state container handed to the router. It holds
 * the document store handle, constructed once at start-up and shared by every
 * request handler, and the shutdown token that ends long-lived streams.
 *
 * Handlers extract just the store through the `FromRef` implementation:
 *
 * ```rust,ignore
 * async fn handler(State(store): State<SharedStore>) {
 *     let records = store.list().await;
 * }
 * ```
 */

use axum::extract::FromRef;
use tokio_util::sync::CancellationToken;

use crate::backend::store::SharedStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Document store holding the `data` collection
    pub store: SharedStore,
    /// Cancelled when the server begins shutting down
    pub shutdown: CancellationToken,
}

impl AppState {
    pub fn new(store: SharedStore, shutdown: CancellationToken) -> Self {
        Self { store, shutdown }
    }
}

impl FromRef<AppState> for SharedStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for CancellationToken {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.shutdown.clone()
    }
}
