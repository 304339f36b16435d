//! Real-time Update Module
//!
//! Pushes collection snapshots to connected clients.
//!
//! - **`broadcast`** - snapshot channel type and publish helper used by the
//!   stores
//! - **`subscription`** - Server-Sent Events handler streaming snapshots
//!
//! The real-time system uses Server-Sent Events (SSE) for one-way
//! communication from server to client. Each event is a complete snapshot,
//! so a client never has to merge partial updates.

/// Snapshot broadcasting utilities
pub mod broadcast;

/// SSE subscription handler
pub mod subscription;

pub use broadcast::{publish_snapshot, SnapshotBroadcast};
pub use subscription::handle_data_subscription;
