/**
 * Backend Error Types
 *
 * Failures inside the HTTP handlers fall into two kinds:
 *
 * - `MalformedRequest` - the body does not parse, or a field (such as the
 *   client timestamp) cannot be converted
 * - `StoreUnavailable` - the document store failed to read, append or commit
 *   a batch
 *
 * Callers never see the distinction: every endpoint reports failures as a
 * single HTTP 500 with a fixed message (see `conversion`). The kind only
 * shows up in the server log.
 */

use thiserror::Error;

use crate::backend::store::StoreError;
use crate::shared::SharedError;

/// Backend-specific error types
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed to parse or validate
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// Human-readable error message
        message: String,
    },

    /// Document store read, write or batch commit failed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),
}

impl BackendError {
    /// Create a new malformed request error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRequest {
            message: message.into(),
        }
    }

    /// Short name of the failure kind, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedRequest { .. } => "MalformedRequest",
            Self::StoreUnavailable(_) => "StoreUnavailable",
        }
    }
}

impl From<serde_json::Error> for BackendError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        Self::malformed(err.to_string())
    }
}
