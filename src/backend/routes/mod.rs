//! Route Configuration Module
//!
//! - **`router`** - main router creation
//! - **`api_routes`** - the `/api` data endpoints

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
