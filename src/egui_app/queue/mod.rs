//! Sequential delivery queue
//!
//! - **`controller`** - the `Idle`/`Dispatching` state machine
//! - **`delivery`** - async drivers that send submissions through an
//!   `IngestApi` and record the last successful send

pub mod controller;
pub mod delivery;

pub use controller::{DispatchState, QueueController};
pub use delivery::{deliver, drain, DeliveryOutcome};
