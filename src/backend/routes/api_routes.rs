/**
 * API Routes
 *
 * - `POST /api/add-data` - append one record after `sleepMs`
 * - `GET /api/cleanup-data` - delete every record in one batch
 * - `GET /api/data` - current records, newest first
 * - `GET /api/data/subscribe` - server-sent snapshot stream
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::data::{handle_add_data, handle_cleanup_data, handle_list_data};
use crate::backend::realtime::handle_data_subscription;
use crate::backend::server::state::AppState;
use crate::shared::api::{ADD_DATA_PATH, CLEANUP_DATA_PATH, LIST_DATA_PATH, SUBSCRIBE_DATA_PATH};

/// Add the data routes to `router`
///
/// Cleanup is mounted on `GET` to stay compatible with existing callers
/// even though it mutates the collection.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route(ADD_DATA_PATH, post(handle_add_data))
        .route(CLEANUP_DATA_PATH, get(handle_cleanup_data))
        .route(LIST_DATA_PATH, get(handle_list_data))
        .route(SUBSCRIBE_DATA_PATH, get(handle_data_subscription))
}
