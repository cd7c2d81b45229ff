//! Nearest-seed colouring under a distance metric
//!
//! Every pixel takes the colour of its closest seed point. The scan is a
//! deliberate brute force, O(pixels x seeds); results are what matter, and
//! any accelerated reimplementation must reproduce them exactly, including
//! the tie-break.

use crate::io::error::Result;
use crate::io::palette::SeedSet;
use crate::math::distance::DistanceMetric;
use crate::spatial::canvas::{Canvas, Color};

/// Colour every pixel by its nearest seed under a built-in metric
///
/// # Errors
///
/// Returns a channel mismatch error if a seed colour's arity disagrees
/// with the canvas.
pub fn fill_nearest(canvas: &mut Canvas, seeds: &SeedSet, metric: DistanceMetric) -> Result<()> {
    fill_nearest_by(canvas, seeds, |d_row, d_col| metric.evaluate(d_row, d_col))
}

/// Colour every pixel by its nearest seed under an arbitrary scalar metric
///
/// The metric maps a `(row, col)` offset to a non-negative value. The
/// strict comparison keeps the first seed in the set's iteration order on
/// an exact distance tie, which makes repeated runs byte-identical.
///
/// # Errors
///
/// Returns a channel mismatch error if a seed colour's arity disagrees
/// with the canvas.
pub fn fill_nearest_by<F>(canvas: &mut Canvas, seeds: &SeedSet, metric: F) -> Result<()>
where
    F: Fn(i64, i64) -> f64,
{
    for (row, col) in canvas.pixels() {
        let mut nearest: Option<(f64, Color)> = None;

        for &((seed_row, seed_col), color) in seeds.entries() {
            let distance = metric(row as i64 - seed_row as i64, col as i64 - seed_col as i64);
            if nearest.is_none_or(|(best, _)| distance < best) {
                nearest = Some((distance, color));
            }
        }

        if let Some((_, color)) = nearest {
            canvas.set(row, col, color)?;
        }
    }

    Ok(())
}
