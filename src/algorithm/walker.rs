//! Weighted random-walk painting
//!
//! The walk seeds the colour field: it paints its current cell, drifts one
//! step along a uniformly chosen axis, and occasionally switches colour by a
//! weighted palette draw. Step counts are typically a large multiple of the
//! pixel count, yet unset pixels always remain; the hole-filling pass closes
//! them afterwards.

use crate::io::error::{Result, invalid_parameter};
use crate::io::palette::Palette;
use crate::spatial::canvas::Canvas;
use rand::Rng;

/// Bounded stochastic walk painting palette colours onto a canvas
#[derive(Debug, Clone)]
pub struct RandomWalk {
    step_count: usize,
    stay_probability: f64,
    palette: Palette,
}

impl RandomWalk {
    /// Configure a walk
    ///
    /// `stay_probability` is the per-step probability that the current
    /// colour is kept; with probability `1 - stay_probability` it is
    /// resampled from the palette distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if `stay_probability` is outside `[0, 1]`.
    pub fn new(step_count: usize, stay_probability: f64, palette: Palette) -> Result<Self> {
        if !stay_probability.is_finite() || !(0.0..=1.0).contains(&stay_probability) {
            return Err(invalid_parameter(
                "stay_probability",
                &stay_probability,
                &"must be a probability in [0, 1]",
            ));
        }

        Ok(Self {
            step_count,
            stay_probability,
            palette,
        })
    }

    /// Run the walk over a canvas
    ///
    /// Starts at a uniformly random position with the first palette colour.
    /// A step that would leave the canvas is pinned to the boundary rather
    /// than reflected or wrapped.
    ///
    /// # Errors
    ///
    /// Returns a channel mismatch error if the palette arity disagrees with
    /// the canvas.
    pub fn paint<R: Rng + ?Sized>(&self, canvas: &mut Canvas, rng: &mut R) -> Result<()> {
        let mut row = rng.random_range(0..canvas.height());
        let mut col = rng.random_range(0..canvas.width());
        let mut color = self.palette.first_color();

        for _ in 0..self.step_count {
            canvas.set(row, col, color)?;

            if rng.random_bool(0.5) {
                row = Self::drift(row, canvas.height(), rng);
            } else {
                col = Self::drift(col, canvas.width(), rng);
            }

            if rng.random::<f64>() > self.stay_probability {
                color = self.palette.sample(rng);
            }
        }

        Ok(())
    }

    // Move one step along an axis, pinned to [0, limit)
    fn drift<R: Rng + ?Sized>(position: usize, limit: usize, rng: &mut R) -> usize {
        if rng.random_bool(0.5) {
            (position + 1).min(limit.saturating_sub(1))
        } else {
            position.saturating_sub(1)
        }
    }
}
