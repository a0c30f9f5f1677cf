//! Error types for claimcast-series.

/// Error type for all fallible operations in the claimcast-series crate.
///
/// Every variant describes input that violates the monthly series
/// invariants (non-empty, contiguous, strictly increasing, non-negative).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a series would contain no observations.
    #[error("series is empty")]
    Empty,

    /// Returned when the timestamp and value columns differ in length.
    #[error("length mismatch: {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of timestamps provided.
        dates: usize,
        /// Number of values provided.
        values: usize,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}
