//! Error signals for degraded or empty inputs.

/// Informational error returned alongside a best-effort min/max result.
///
/// This is never a hard failure: [`Samples::minmax`](crate::Samples::minmax)
/// still returns the extrema of whatever valid data it found, and the caller
/// decides whether to drop the interval or log and continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MinmaxError {
    /// One or more NaN samples were present and excluded from the scan.
    #[display("{count} NaN sample(s) excluded from min/max scan")]
    NanSamples {
        /// Number of NaN samples encountered.
        count: usize,
    },
    /// The collection held no samples at all.
    #[display("min/max requested on an empty sample collection")]
    EmptySamples,
}

impl MinmaxError {
    /// Returns `true` when the error indicates NaN-degraded input (as
    /// opposed to an empty collection).
    pub fn is_degraded_input(&self) -> bool {
        matches!(self, Self::NanSamples { .. })
    }
}
