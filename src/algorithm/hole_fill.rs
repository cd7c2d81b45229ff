//! Neighbour-consensus filling of unset pixels
//!
//! An unset pixel is one whose colour equals the all-zero sentinel. Each
//! pass scans the canvas in row-major order against its live, partially
//! updated state, so pixels later in a pass can see fills made earlier in
//! the same pass. The colour written is drawn with probability proportional
//! to its frequency among the set neighbours.

use crate::io::error::Result;
use crate::math::sampling::WeightedTable;
use crate::spatial::canvas::{Canvas, Color};
use rand::Rng;

/// Iterative hole-filling pass with a depth bound
#[derive(Debug, Clone, Copy)]
pub struct HoleFiller {
    max_depth: usize,
}

impl HoleFiller {
    /// Configure a filler running at most `max_depth` passes
    pub const fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Fill unset pixels from their set neighbours
    ///
    /// Stops early once a full pass fills nothing. Pixels still unset after
    /// `max_depth` passes are left unset; that is a documented outcome, not
    /// an error. Returns the number of pixels filled.
    ///
    /// # Errors
    ///
    /// Propagates canvas write failures; these indicate a programming
    /// defect, not a recoverable condition.
    pub fn fill<R: Rng + ?Sized>(&self, canvas: &mut Canvas, rng: &mut R) -> Result<usize> {
        let mut total_filled = 0;

        for _ in 0..self.max_depth {
            let mut filled_this_pass = 0;

            for (row, col) in canvas.pixels() {
                let Some(current) = canvas.get(row, col) else {
                    continue;
                };
                if !current.is_unset() {
                    continue;
                }

                // Frequency table over distinct set neighbour colours,
                // in first-seen adjacency order
                let mut colors: Vec<Color> = Vec::with_capacity(4);
                let mut counts: Vec<f64> = Vec::with_capacity(4);
                for (neighbour_row, neighbour_col) in canvas.adjacent(row, col) {
                    let Some(neighbour) = canvas.get(neighbour_row, neighbour_col) else {
                        continue;
                    };
                    if neighbour.is_unset() {
                        continue;
                    }
                    if let Some(slot) = colors.iter().position(|&known| known == neighbour) {
                        if let Some(count) = counts.get_mut(slot) {
                            *count += 1.0;
                        }
                    } else {
                        colors.push(neighbour);
                        counts.push(1.0);
                    }
                }

                // Nothing but unset neighbours; retry on a later pass
                if colors.is_empty() {
                    continue;
                }

                let table = WeightedTable::new(&counts)?;
                let Some(&choice) = colors.get(table.sample(rng)) else {
                    continue;
                };
                canvas.set(row, col, choice)?;
                filled_this_pass += 1;
            }

            total_filled += filled_this_pass;
            if filled_this_pass == 0 {
                break;
            }
        }

        Ok(total_filled)
    }
}
