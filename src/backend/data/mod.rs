//! Data Endpoints
//!
//! - **`service`** - ingest and cleanup logic against a `DocumentStore`
//! - **`handlers`** - axum handlers wrapping the service functions

/// Endpoint logic
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use handlers::{handle_add_data, handle_cleanup_data, handle_list_data};
