/**
 * Router Configuration
 *
 * Combines the API routes with request tracing and a 404 fallback.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state holding the document store
///
/// # Returns
///
/// Router with state applied, ready for `axum::serve`
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router.layer(TraceLayer::new_for_http()).with_state(app_state)
}
