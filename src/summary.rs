//! Aggregate summary of one flush interval.

use serde::{Deserialize, Serialize};

use crate::samples::Samples;

/// Every statistic for one sample collection, computed in a single pass
/// over the query surface.
///
/// This is the shape the reporting path ships to a backend: one struct per
/// timer per flush interval, serializable as named fields. Computing it
/// sorts the underlying collection (see [`Samples::sort`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of samples in the interval.
    pub count: usize,
    /// Number of distinct values.
    pub unique: usize,
    /// Smallest non-NaN sample (0.0 when none exist).
    pub min: f64,
    /// Largest non-NaN sample (0.0 when none exist).
    pub max: f64,
    /// Arithmetic mean (0.0 when empty).
    pub mean: f64,
    /// Median (0.0 when empty).
    pub median: f64,
    /// Sum over the interval.
    pub sum: f64,
    /// Requested quantiles as `(probability, value)` pairs, in request order.
    pub quantiles: Vec<(f64, f64)>,
    /// `true` when NaN samples were present in the input.
    pub degraded: bool,
}

impl Summary {
    /// Compute all statistics for `samples`, including the quantiles at the
    /// given probabilities.
    ///
    /// # Arguments
    ///
    /// * `samples` - The collection for one flush interval. Sorted in place
    ///   as a side effect.
    /// * `quantiles` - Probabilities in `[0, 1]`, e.g. `&[0.5, 0.9, 0.99]`.
    ///
    /// # Panics
    ///
    /// Panics if any probability is outside `[0, 1]`.
    pub fn compute(samples: &mut Samples, quantiles: &[f64]) -> Self {
        let (min, max, err) = samples.minmax();
        let degraded = err.is_some_and(|e| e.is_degraded_input());
        let quantile_values = quantiles
            .iter()
            .map(|&p| (p, samples.quantile(p)))
            .collect();
        Self {
            count: samples.len(),
            unique: samples.unique_count(),
            min,
            max,
            mean: samples.mean(),
            median: samples.median(),
            sum: samples.sum(),
            quantiles: quantile_values,
            degraded,
        }
    }
}
