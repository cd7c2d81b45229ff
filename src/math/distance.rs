//! Distance metrics over integer pixel offsets
//!
//! A metric maps a `(row, col)` offset to a non-negative scalar. Manhattan
//! produces 45-degree facets when used for nearest-neighbour colouring,
//! Euclidean produces rounder cell boundaries.

use crate::io::error::{SynthesisError, config_error};
use std::str::FromStr;

/// Built-in distance metrics for nearest-neighbour colouring
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMetric {
    /// L1 distance: `|d_row| + |d_col|`
    Manhattan,
    /// L2 distance: `sqrt(d_row^2 + d_col^2)`
    Euclidean,
}

impl DistanceMetric {
    /// Evaluate the metric for a pixel offset
    pub fn evaluate(self, d_row: i64, d_col: i64) -> f64 {
        match self {
            Self::Manhattan => (d_row.abs() + d_col.abs()) as f64,
            Self::Euclidean => {
                let dr = d_row as f64;
                let dc = d_col as f64;
                dr.mul_add(dr, dc * dc).sqrt()
            }
        }
    }
}

impl FromStr for DistanceMetric {
    type Err = SynthesisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "manhattan" | "taxicab" | "l1" => Ok(Self::Manhattan),
            "euclidean" | "l2" => Ok(Self::Euclidean),
            other => Err(config_error(format!("unknown distance metric '{other}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_values() {
        assert!((DistanceMetric::Manhattan.evaluate(2, -1) - 3.0).abs() < f64::EPSILON);
        assert!((DistanceMetric::Euclidean.evaluate(3, 4) - 5.0).abs() < f64::EPSILON);
        assert!(DistanceMetric::Euclidean.evaluate(0, 0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!(
            "manhattan".parse::<DistanceMetric>().ok(),
            Some(DistanceMetric::Manhattan)
        );
        assert_eq!(
            "Taxicab".parse::<DistanceMetric>().ok(),
            Some(DistanceMetric::Manhattan)
        );
        assert_eq!(
            "euclidean".parse::<DistanceMetric>().ok(),
            Some(DistanceMetric::Euclidean)
        );
        assert!("chebyshev".parse::<DistanceMetric>().is_err());
    }
}
