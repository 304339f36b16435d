//! Shared Module
//!
//! Types shared between the desktop client and the backend. Everything here
//! is serializable and travels over the HTTP API or the real-time stream.

/// Submission and record data structures
pub mod record;

/// Client timestamp parsing
pub mod timestamp;

/// Route paths and request/response bodies
pub mod api;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use record::{sort_newest_first, Record, RecordDraft, Submission};
pub use timestamp::ClientTimestamp;
pub use api::{AddDataRequest, ErrorResponse, MessageResponse};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
