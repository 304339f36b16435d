/**
 * Data Endpoint Handlers
 *
 * - `POST /api/add-data` - append one record after the requested delay
 * - `GET /api/cleanup-data` - delete every record in one batch
 * - `GET /api/data` - current records, newest first
 *
 * The add handler takes the raw body rather than `Json<T>`; a body that
 * fails to parse is a 500 with the endpoint's fixed message.
 */

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::backend::data::service::{cleanup, ingest};
use crate::backend::error::{BackendError, Endpoint, EndpointError};
use crate::backend::store::SharedStore;
use crate::shared::api::{ADD_DATA_SUCCESS, CLEANUP_DATA_SUCCESS};
use crate::shared::{sort_newest_first, MessageResponse, Record};

/// Handle `POST /api/add-data`
///
/// # Returns
///
/// * `201 {"message": "Data added successfully"}` once the record is stored
/// * `500 {"error": "Error Adding Data"}` on any failure
pub async fn handle_add_data(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), EndpointError> {
    ingest(store.as_ref(), &body)
        .await
        .map_err(|e| EndpointError::new(Endpoint::AddData, e))?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(ADD_DATA_SUCCESS))))
}

/// Handle `GET /api/cleanup-data`
///
/// An empty collection is a successful no-op.
///
/// # Returns
///
/// * `201 {"message": "Data deleted successfully"}`
/// * `500 {"error": "Error Deleting Data"}` if the read or the batch commit
///   fails
pub async fn handle_cleanup_data(
    State(store): State<SharedStore>,
) -> Result<(StatusCode, Json<MessageResponse>), EndpointError> {
    cleanup(store.as_ref())
        .await
        .map_err(|e| EndpointError::new(Endpoint::CleanupData, e))?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(CLEANUP_DATA_SUCCESS))))
}

/// Handle `GET /api/data`
pub async fn handle_list_data(
    State(store): State<SharedStore>,
) -> Result<Json<Vec<Record>>, EndpointError> {
    let mut records = store
        .list()
        .await
        .map_err(|e| EndpointError::new(Endpoint::ListData, BackendError::from(e)))?;

    sort_newest_first(&mut records);
    Ok(Json(records))
}
