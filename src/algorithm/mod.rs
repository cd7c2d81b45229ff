//! Synthesis passes that transform a canvas in place
//!
//! Each pass runs to completion before the next begins; a single seeded
//! generator is threaded through every stochastic choice so whole pipelines
//! replay byte-identically.

/// Dissolving small or enclosed colour blobs into their surroundings
pub mod blob_removal;
/// End-to-end pipeline drivers and their configuration
pub mod executor;
/// Neighbour-consensus filling of unset pixels
pub mod hole_fill;
/// Nearest-seed colouring under a distance metric
pub mod nearest;
/// Weighted random-walk painting
pub mod walker;
