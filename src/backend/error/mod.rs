//! Backend Error Module
//!
//! Error types for the HTTP handlers and their conversion into responses.
//!
//! - **`types`** - `BackendError` and its constructors
//! - **`conversion`** - `EndpointError`, which implements `IntoResponse`
//!
//! Handlers return `Result<_, EndpointError>` and attach the endpoint with
//! `map_err`:
//!
//! ```rust,ignore
//! ingest(store.as_ref(), &body)
//!     .await
//!     .map_err(|e| EndpointError::new(Endpoint::AddData, e))?;
//! ```

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::{Endpoint, EndpointError};
pub use types::BackendError;
