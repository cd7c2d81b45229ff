//! Weighted random selection over a cumulative-weight table
//!
//! Every stochastic choice in the system (palette draws, hole-fill neighbour
//! draws, blob-removal border draws) goes through the same primitive: build a
//! cumulative table once, draw a uniform value, and binary-search the table.
//! Given a seeded generator the draw sequence is fully reproducible.

use crate::io::error::{Result, config_error};
use rand::Rng;

/// Cumulative-weight table for index selection proportional to weight
///
/// Entries with zero weight are never selected; the table itself is
/// immutable after construction.
#[derive(Debug, Clone)]
pub struct WeightedTable {
    cumulative: Vec<f64>,
}

impl WeightedTable {
    /// Build a table from raw weights
    ///
    /// Weights are normalized implicitly by the draw, so they may be given
    /// in any non-negative scale (counts, ratios, pixel totals).
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `weights` is empty, contains a
    /// negative or non-finite value, or sums to zero.
    pub fn new(weights: &[f64]) -> Result<Self> {
        if weights.is_empty() {
            return Err(config_error("weighted table requires at least one entry"));
        }

        let mut cumulative = Vec::with_capacity(weights.len());
        let mut total = 0.0_f64;
        for &weight in weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(config_error(format!(
                    "weights must be non-negative and finite, got {weight}"
                )));
            }
            total += weight;
            cumulative.push(total);
        }

        if total <= 0.0 {
            return Err(config_error("weights must not all be zero"));
        }

        Ok(Self { cumulative })
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// Whether the table has no entries (never true for a constructed table)
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// Draw an index with probability proportional to its weight
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let total = self.cumulative.last().copied().unwrap_or(0.0);
        let draw = rng.random::<f64>() * total;

        // Strict comparison skips leading zero-weight entries at draw 0.0
        let index = self.cumulative.partition_point(|&bound| bound <= draw);
        index.min(self.cumulative.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_rejects_degenerate_weights() {
        assert!(WeightedTable::new(&[]).is_err());
        assert!(WeightedTable::new(&[1.0, -0.5]).is_err());
        assert!(WeightedTable::new(&[0.0, 0.0]).is_err());
        assert!(WeightedTable::new(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_zero_weight_entries_are_never_drawn() {
        let table = match WeightedTable::new(&[0.0, 1.0, 0.0, 3.0]) {
            Ok(table) => table,
            Err(err) => unreachable!("valid weights rejected: {err}"),
        };

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let index = table.sample(&mut rng);
            assert!(index == 1 || index == 3, "drew zero-weight index {index}");
        }
    }

    #[test]
    fn test_draws_follow_weights_roughly() {
        let table = match WeightedTable::new(&[1.0, 9.0]) {
            Ok(table) => table,
            Err(err) => unreachable!("valid weights rejected: {err}"),
        };

        let mut rng = StdRng::seed_from_u64(11);
        let draws = 10_000;
        let heavy = (0..draws).filter(|_| table.sample(&mut rng) == 1).count();

        // Expect roughly 90%, with generous slack for a fixed seed
        assert!((8_500..=9_500).contains(&heavy), "heavy index drawn {heavy} times");
    }
}
