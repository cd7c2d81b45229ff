//! Dissolving small or enclosed colour blobs
//!
//! A region is isolated when its pixel count is at or below the smallness
//! threshold, or when every one of its boundary points belongs to a single
//! surrounding colour. Isolated regions are recoloured by a draw over their
//! bordering colours, weighted by each bordering region's pixel count.
//!
//! Decisions for every region are made against a frozen snapshot of the
//! canvas taken before any recolouring, so one pass never cascades into
//! itself; callers apply multiple passes to propagate changes further.

use crate::io::error::Result;
use crate::math::sampling::WeightedTable;
use crate::spatial::canvas::{Canvas, Color};
use crate::spatial::region::group_regions;
use rand::Rng;
use std::collections::BTreeMap;

/// Blob-removal pass parameterized by the smallness threshold
#[derive(Debug, Clone, Copy)]
pub struct BlobRemover {
    smallness_threshold: usize,
}

impl BlobRemover {
    /// Configure a remover; regions of at most `smallness_threshold` pixels
    /// are dissolved regardless of their border
    pub const fn new(smallness_threshold: usize) -> Self {
        Self { smallness_threshold }
    }

    /// Run one removal pass, returning the number of regions dissolved
    ///
    /// Zero dissolved regions is the normal terminal state for repeated
    /// passes, not an error. A region whose boundary is empty (a region
    /// covering the whole canvas) is left untouched.
    ///
    /// # Errors
    ///
    /// Propagates canvas write failures; these indicate a programming
    /// defect, not a recoverable condition.
    pub fn remove<R: Rng + ?Sized>(&self, canvas: &mut Canvas, rng: &mut R) -> Result<usize> {
        let snapshot = canvas.clone();
        let regions = group_regions(&snapshot);
        let cols = snapshot.width();

        // Region index per cell replaces a linear region search per boundary point
        let mut region_of = vec![0_usize; snapshot.width() * snapshot.height()];
        for (index, region) in regions.iter().enumerate() {
            for &(row, col) in region.points() {
                if let Some(slot) = region_of.get_mut(row * cols + col) {
                    *slot = index;
                }
            }
        }

        let mut dissolved = 0;

        for region in &regions {
            // Bordering colours weighted by their regions' pixel counts;
            // a BTreeMap keys the draw deterministically
            let mut border: BTreeMap<Color, f64> = BTreeMap::new();
            for (row, col) in region.boundary_points() {
                let Some(&neighbour_index) = region_of.get(row * cols + col) else {
                    continue;
                };
                let Some(neighbour) = regions.get(neighbour_index) else {
                    continue;
                };
                *border.entry(neighbour.color()).or_insert(0.0) += neighbour.len() as f64;
            }
            if border.is_empty() {
                continue;
            }

            let isolated =
                border.len() == 1 || region.len() <= self.smallness_threshold;
            if !isolated {
                continue;
            }

            let weights: Vec<f64> = border.values().copied().collect();
            let table = WeightedTable::new(&weights)?;
            let Some(&replacement) = border.keys().nth(table.sample(rng)) else {
                continue;
            };

            for &(row, col) in region.points() {
                canvas.set(row, col, replacement)?;
            }
            dissolved += 1;
        }

        Ok(dissolved)
    }
}
