//! Theme Module
//!
//! Color constants and frame builders for the dashboard.

pub mod colors;
pub mod styles;
