//! Integration tests

#[cfg(feature = "ssr")]
pub mod api;
pub mod client;
