//! Common test utilities and helpers
//!
//! - Record and submission fixtures
//! - Document stores that fail on demand
//! - PostgreSQL fixtures for the database-backed store
//! - Scripted `IngestApi` implementations
//! - Custom assertion macros

#[macro_use]
pub mod assertions;
pub mod fixtures;
#[cfg(feature = "ssr")]
pub mod stores;
#[cfg(feature = "ssr")]
pub mod database;
pub mod api;

pub use fixtures::*;
