//! Mathematical utilities for the synthesis passes

/// Distance metrics over integer pixel offsets
pub mod distance;
/// Cumulative-weight tables for reproducible weighted draws
pub mod sampling;
