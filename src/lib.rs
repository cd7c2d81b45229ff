//! Stochastic pixel-art synthesis through random walks and region-based filling
//!
//! The system paints a colour field by a weighted random walk, closes the
//! remaining unset pixels by neighbour consensus, dissolves small or enclosed
//! colour blobs into their surroundings, and upscales the result. A second
//! pipeline colours every pixel by its nearest member of a sparse seed set
//! under a chosen distance metric.

#![forbid(unsafe_code)]

/// Core synthesis passes: random walk, hole filling, blob removal, nearest-neighbour fill
pub mod algorithm;
/// Input/output operations, configuration defaults, and error handling
pub mod io;
/// Mathematical utilities for weighted sampling and distance metrics
pub mod math;
/// Canvas, colour, and region data structures
pub mod spatial;

pub use io::error::{Result, SynthesisError};
