/**
 * HTTP API Contract
 *
 * Route paths and JSON bodies shared by the axum backend and the desktop
 * client. Success responses carry `{ "message": ... }`, failures carry
 * `{ "error": ... }`.
 */
use serde::{Deserialize, Serialize};

use crate::shared::record::Submission;
use crate::shared::timestamp::ClientTimestamp;

/// `POST` - append one record
pub const ADD_DATA_PATH: &str = "/api/add-data";

/// `GET` - delete every record in one batch
pub const CLEANUP_DATA_PATH: &str = "/api/cleanup-data";

/// `GET` - current snapshot, newest first
pub const LIST_DATA_PATH: &str = "/api/data";

/// `GET` - Server-Sent Events stream of snapshots
pub const SUBSCRIBE_DATA_PATH: &str = "/api/data/subscribe";

/// SSE event name carrying a full collection snapshot
pub const SNAPSHOT_EVENT: &str = "snapshot";

pub const ADD_DATA_SUCCESS: &str = "Data added successfully";
pub const ADD_DATA_FAILURE: &str = "Error Adding Data";
pub const CLEANUP_DATA_SUCCESS: &str = "Data deleted successfully";
pub const CLEANUP_DATA_FAILURE: &str = "Error Deleting Data";
pub const LIST_DATA_FAILURE: &str = "Error Reading Data";

/// Body of `POST /api/add-data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddDataRequest {
    pub sender: String,
    pub message: String,
    pub sleep_ms: u64,
    pub timestamp_client: ClientTimestamp,
}

impl From<&Submission> for AddDataRequest {
    fn from(submission: &Submission) -> Self {
        Self {
            sender: submission.sender.clone(),
            message: submission.message.clone(),
            sleep_ms: submission.sleep_ms,
            timestamp_client: submission.timestamp_client.into(),
        }
    }
}

/// Success body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Failure body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
