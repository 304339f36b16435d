//! Shared Error Types
//!
//! This module defines error types that are shared between the desktop client
//! and the backend. These errors represent failures in the types both sides
//! exchange over HTTP.
//!
//! # Error Categories
//!
//! - `ValidationError` - Data validation failures
//! - `TimestampError` - A client timestamp that cannot be converted
//!
//! # Usage
//!
//! ```rust
//! use dataqueue::shared::error::SharedError;
//!
//! let error = SharedError::validation("message", "Missing message");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend
#[derive(Debug, Error, Clone)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Timestamp conversion error
    #[error("Invalid timestamp '{value}': {message}")]
    TimestampError {
        /// The value as received
        value: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new timestamp error
    pub fn timestamp(value: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TimestampError {
            value: value.into(),
            message: message.into(),
        }
    }
}
