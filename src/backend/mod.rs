//! Backend Module
//!
//! Server-side code for the dataqueue application: an axum HTTP server that
//! ingests records into a document store, deletes them in batches, and
//! streams snapshots of the collection to subscribers.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - configuration, application state, start-up
//! - **`routes`** - router assembly
//! - **`data`** - add, cleanup and list endpoints
//! - **`realtime`** - snapshot broadcasting and the SSE endpoint
//! - **`store`** - the `DocumentStore` trait with memory and PostgreSQL
//!   backends
//! - **`error`** - handler errors and their HTTP responses
//!
//! ```text
//! backend/
//! ├── mod.rs
//! ├── main.rs      - server binary
//! ├── server/
//! ├── routes/
//! ├── data/
//! ├── realtime/
//! ├── store/
//! └── error/
//! ```
//!
//! # Error Handling
//!
//! Every endpoint collapses its failures into `500` with a fixed message.
//! The underlying cause is logged through `tracing`, never returned to the
//! caller.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Data endpoints
pub mod data;

/// Real-time update system
pub mod realtime;

/// Document store backends
pub mod store;

/// Backend error types
pub mod error;

pub use error::{BackendError, EndpointError};
pub use server::{create_app, create_app_with_shutdown, create_app_with_store, ServerConfig};
pub use store::{DocumentStore, MemoryCollection, PgCollection, SharedStore, StoreError};
