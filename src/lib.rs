//! dataqueue - Main Library
//!
//! A sequential ingest demo. A desktop client queues messages from a form
//! and posts them one at a time to the server; the server waits the
//! requested delay, stamps each record and appends it to a document store.
//! A live table on the client follows the collection through server-sent
//! snapshots, newest first.
//!
//! # Module Structure
//!
//! - **`shared`** - types used by both sides
//!   - `Submission` and `Record`, request and response bodies
//!   - client timestamp parsing, configuration, error types
//!
//! - **`backend`** - server-side code (only compiled with the `ssr` feature)
//!   - axum endpoints for add, cleanup, list and subscribe
//!   - memory and PostgreSQL document stores with snapshot broadcasting
//!
//! - **`egui_app`** - native desktop app (egui/eframe)
//!   - submission form, dispatch queue, live table
//!   - HTTP client, SSE change feed, SQLite local storage
//!
//! # Feature Flags
//!
//! - **`ssr`** - enables the `backend` module and the server binary
//!
//! # Usage
//!
//! ```rust,ignore
//! use dataqueue::backend::server::{create_app, ServerConfig};
//!
//! let config = ServerConfig::default();
//! let shutdown = tokio_util::sync::CancellationToken::new();
//! let app = create_app(&config, shutdown.clone()).await;
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await.unwrap();
//! axum::serve(listener, app)
//!     .with_graceful_shutdown(shutdown.cancelled_owned())
//!     .await
//!     .unwrap();
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
/// Only compiled for native targets (not WASM)
#[cfg(not(target_arch = "wasm32"))]
pub mod egui_app;
