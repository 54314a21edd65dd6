//! Distance metrics for pattern comparison.
//!
//! Both metrics are exact and operate elementwise over equal-length
//! patterns. Lower values mean more similar.

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Available distance metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    /// Euclidean (L2) distance
    #[default]
    Euclidean,
    /// Manhattan (L1) distance
    Manhattan,
}

/// Distance computation for patterns.
pub struct Distance;

impl Distance {
    /// Compute the distance between two patterns using the specified metric.
    ///
    /// # Panics
    /// If the patterns differ in width.
    pub fn compute(a: &Pattern, b: &Pattern, metric: Metric) -> f64 {
        match metric {
            Metric::Euclidean => Self::euclidean(a, b),
            Metric::Manhattan => Self::manhattan(a, b),
        }
    }

    /// Euclidean distance: sqrt(sum((a_i - b_i)^2)).
    pub fn euclidean(a: &Pattern, b: &Pattern) -> f64 {
        assert_eq!(a.width(), b.width(), "Dimension mismatch in euclidean");

        // Squared u32 differences overflow u64 once two are summed.
        let sum_sq: u128 = a
            .data()
            .iter()
            .zip(b.data().iter())
            .map(|(&x, &y)| {
                let diff = x.abs_diff(y) as u128;
                diff * diff
            })
            .sum();

        (sum_sq as f64).sqrt()
    }

    /// Manhattan distance: sum(|a_i - b_i|).
    pub fn manhattan(a: &Pattern, b: &Pattern) -> f64 {
        assert_eq!(a.width(), b.width(), "Dimension mismatch in manhattan");

        a.data()
            .iter()
            .zip(b.data().iter())
            .map(|(&x, &y)| x.abs_diff(y) as u64)
            .sum::<u64>() as f64
    }
}
