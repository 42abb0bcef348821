//! The sample collection and its statistical queries.
//!
//! [`Samples`] owns a flat `Vec<f64>` of observations. Statistics are
//! computed on demand; the sort-based queries (`median`, `quantile`,
//! `unique_count`) reorder the backing storage in place rather than sorting
//! a defensive copy, which keeps the flush path allocation-free. Callers
//! that need the insertion order afterwards must copy first.

use crate::error::MinmaxError;

/// A mutable collection of floating-point observations.
///
/// Built once per aggregation window, queried, then dropped. The collection
/// is not internally synchronized; concurrent append and query must be
/// serialized by the caller.
///
/// NaN values are accepted at insertion and carried as-is. They are
/// special-cased where it matters ([`minmax`](Self::minmax)); elsewhere they
/// flow through IEEE arithmetic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Samples {
    values: Vec<f64>,
}

impl Samples {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create an empty collection with room for `capacity` samples.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    /// Append one observation.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Number of stored samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// `true` when no samples are stored.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at position `index` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside `[0, len())`. An out-of-range index is a
    /// caller bug, not bad runtime data, so it fails loudly instead of
    /// clamping.
    pub fn get(&self, index: usize) -> f64 {
        self.values[index]
    }

    /// Read-only view of the stored samples in their current order.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over the stored samples in their current order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Sort the collection ascending, in place.
    ///
    /// Uses `f64::total_cmp`, so the order is deterministic even with NaN
    /// present (NaN sorts after every number). The reordering is permanent:
    /// subsequent [`get`](Self::get) calls observe the sorted order.
    pub fn sort(&mut self) {
        self.values.sort_unstable_by(f64::total_cmp);
    }

    /// Number of distinct values, by floating-point equality.
    ///
    /// Sorts the collection as a side effect, then counts transitions
    /// between adjacent unequal values in one linear scan.
    ///
    /// # Returns
    ///
    /// The distinct-value count; 0 for an empty collection.
    pub fn unique_count(&mut self) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        self.sort();
        let mut count = 1;
        for i in 1..self.values.len() {
            if self.values[i] != self.values[i - 1] {
                count += 1;
            }
        }
        count
    }

    /// Smallest and largest sample, in one scan and without sorting.
    ///
    /// NaN samples never become the min or max: each element is tested with
    /// `is_nan` before it touches the running extrema, so a NaN cannot
    /// poison the comparison chain. If any NaN was present the scan still
    /// returns the extrema of the valid data, plus
    /// [`MinmaxError::NanSamples`] so the caller can flag degraded input.
    ///
    /// # Returns
    ///
    /// `(min, max, error)`. On an empty collection: `(0.0, 0.0,
    /// Some(MinmaxError::EmptySamples))`. If every sample is NaN: `(0.0,
    /// 0.0, Some(MinmaxError::NanSamples { .. }))`.
    pub fn minmax(&self) -> (f64, f64, Option<MinmaxError>) {
        if self.values.is_empty() {
            return (0.0, 0.0, Some(MinmaxError::EmptySamples));
        }
        let mut nan_count = 0usize;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in &self.values {
            if v.is_nan() {
                nan_count += 1;
                continue;
            }
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        if nan_count == self.values.len() {
            // No valid extrema exist; keep the empty-collection convention.
            return (0.0, 0.0, Some(MinmaxError::NanSamples { count: nan_count }));
        }
        let err = if nan_count > 0 {
            Some(MinmaxError::NanSamples { count: nan_count })
        } else {
            None
        };
        (min, max, err)
    }

    /// Median of the collection. Sorts in place as a side effect.
    ///
    /// Odd length returns the exact middle element; even length returns the
    /// arithmetic mean of the two middle elements. Empty → 0.0.
    pub fn median(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.sort();
        let n = self.values.len();
        if n % 2 == 1 {
            self.values[n / 2]
        } else {
            (self.values[n / 2 - 1] + self.values[n / 2]) / 2.0
        }
    }

    /// Arithmetic mean, `sum() / len()`. No sort. Empty → 0.0.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        self.sum() / self.values.len() as f64
    }

    /// The `p`-th quantile, by linear interpolation of the empirical CDF
    /// (the R-7 definition). Sorts in place as a side effect.
    ///
    /// The continuous rank is `h = p * (n - 1)`; the result interpolates
    /// between the order statistics at `floor(h)` and `ceil(h)`. `p = 0`
    /// yields the minimum, `p = 1` the maximum.
    ///
    /// # Arguments
    ///
    /// * `p` - Quantile probability in `[0, 1]`.
    ///
    /// # Returns
    ///
    /// The quantile value; 0.0 for an empty collection.
    ///
    /// # Panics
    ///
    /// Panics if `p` is outside `[0, 1]` - that is a caller contract
    /// violation, not runtime data.
    pub fn quantile(&mut self, p: f64) -> f64 {
        assert!(
            (0.0..=1.0).contains(&p),
            "quantile probability must be in [0, 1]"
        );
        if self.values.is_empty() {
            return 0.0;
        }
        self.sort();
        let n = self.values.len();
        let h = (n - 1) as f64 * p;
        let h_floor = h.floor() as usize;
        let h_frac = h - h.floor();
        if h_floor >= n - 1 {
            return self.values[n - 1];
        }
        let lo = self.values[h_floor];
        let hi = self.values[h_floor + 1];
        lo + h_frac * (hi - lo)
    }

    /// Sum of all samples, accumulated left-to-right over the stored order.
    ///
    /// The accumulation order is part of the contract: reordering could
    /// change the low bits of the result under IEEE arithmetic, and flush
    /// results must be reproducible for a given collection state.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Self { values }
    }
}

impl FromIterator<f64> for Samples {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl Extend<f64> for Samples {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        self.values.extend(iter);
    }
}
