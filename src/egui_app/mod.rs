//! egui Native Desktop App Module
//!
//! Desktop client for the ingest service: a submission form feeding a
//! sequential delivery queue, and a live table of the collection.
//!
//! # Architecture
//!
//! - **`config`** - server URL and local storage location
//! - **`api_client`** - `IngestApi` trait and its HTTP implementation
//! - **`local_db`** - SQLite key/value storage for persisted UI state
//! - **`queue`** - `Idle`/`Dispatching` queue controller and delivery drivers
//! - **`realtime`** - SSE decoder and the `ChangeFeed` subscription
//! - **`live_table`** - snapshot-driven working set behind the table
//! - **`form`** - submission form model
//! - **`notifications`** - transient toasts
//! - **`state`** - `AppState`, the glue polled every frame
//! - **`views`** / **`theme`** - egui rendering
//! - **`main`** - application entry point (binary)
//!
//! ```text
//! egui_app/
//! ├── mod.rs
//! ├── main.rs
//! ├── config.rs
//! ├── api_client.rs
//! ├── form.rs
//! ├── live_table.rs
//! ├── notifications.rs
//! ├── local_db/
//! ├── queue/
//! ├── realtime/
//! ├── state/
//! ├── theme/
//! └── views/
//! ```

pub mod config;
pub mod api_client;
pub mod local_db;
pub mod queue;
pub mod realtime;
pub mod live_table;
pub mod form;
pub mod notifications;
pub mod state;
pub mod views;
pub mod theme;

// Re-export commonly used types
pub use api_client::{ClientError, HttpApiClient, IngestApi};
pub use config::Config;
pub use live_table::LiveTable;
pub use local_db::{LocalDatabase, LocalStorage, StorageError};
pub use queue::{DispatchState, QueueController};
pub use realtime::{ChangeFeed, SseChangeFeed};
pub use state::AppState;
