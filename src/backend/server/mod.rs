//! Server Module
//!
//! Start-up plumbing for the HTTP server.
//!
//! - **`state`** - `AppState` and its `FromRef` implementations
//! - **`config`** - environment configuration and store selection
//! - **`init`** - application assembly
//!
//! ```text
//! server/
//! ├── mod.rs
//! ├── state.rs
//! ├── config.rs
//! └── init.rs
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_store, ServerConfig};
pub use init::{create_app, create_app_with_shutdown, create_app_with_store};
pub use state::AppState;
