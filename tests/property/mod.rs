//! Property-based tests

pub mod ordering_props;
pub mod decoder_props;
