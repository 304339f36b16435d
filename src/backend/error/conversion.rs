/**
 * Error Conversion
 *
 * Turns a `BackendError` into the uniform failure response of the endpoint
 * it occurred in. The error kind and detail are logged; the client only
 * receives:
 *
 * ```json
 * { "error": "Error Adding Data" }
 * ```
 *
 * with status 500.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;
use crate::shared::api::{ADD_DATA_FAILURE, CLEANUP_DATA_FAILURE, LIST_DATA_FAILURE};
use crate::shared::ErrorResponse;

/// Endpoint a failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    AddData,
    CleanupData,
    ListData,
}

impl Endpoint {
    /// Fixed message reported to the client on failure
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::AddData => ADD_DATA_FAILURE,
            Self::CleanupData => CLEANUP_DATA_FAILURE,
            Self::ListData => LIST_DATA_FAILURE,
        }
    }

    fn log_prefix(self) -> &'static str {
        match self {
            Self::AddData => "[Ingest]",
            Self::CleanupData => "[Cleanup]",
            Self::ListData => "[List]",
        }
    }
}

/// A backend error tagged with the endpoint it occurred in
#[derive(Debug)]
pub struct EndpointError {
    pub endpoint: Endpoint,
    pub source: BackendError,
}

impl EndpointError {
    pub fn new(endpoint: Endpoint, source: BackendError) -> Self {
        Self { endpoint, source }
    }
}

impl IntoResponse for EndpointError {
    fn into_response(self) -> Response {
        tracing::error!(
            "{} Request failed ({}): {}",
            self.endpoint.log_prefix(),
            self.source.kind(),
            self.source
        );

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::new(self.endpoint.failure_message())),
        )
            .into_response()
    }
}
