//! Error types for the claimcast-analysis crate.

/// Error type for all fallible operations in the claimcast-analysis crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalysisError {
    /// Returned when a count parameter (window, horizon) violates its
    /// constraint.
    #[error("invalid parameter '{parameter}': must be >= 1, got {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The rejected value.
        value: usize,
    },

    /// Returned when one or more calendar months have no observations, so
    /// the seasonal index cannot be normalized.
    #[error("insufficient data: no observations for month(s) {missing:?}; supply at least one full annual cycle")]
    MissingMonths {
        /// Calendar months (1..=12) with empty buckets.
        missing: Vec<u8>,
    },

    /// Returned when the mean of the monthly means is zero, which leaves the
    /// seasonal index undefined.
    #[error("insufficient data: mean of monthly means is zero")]
    ZeroSeasonalMean,

    /// Returned when a rolling series has no defined entry to forecast from.
    #[error("insufficient data: window {window} leaves no defined entry in a series of length {len}")]
    NoDefinedLevel {
        /// Rolling window length.
        window: usize,
        /// Length of the rolled series.
        len: usize,
    },
}

impl AnalysisError {
    /// Returns `true` for the variants caused by too little history rather
    /// than a bad parameter.
    pub fn is_insufficient_data(&self) -> bool {
        !matches!(self, Self::InvalidParameter { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_parameter() {
        let err = AnalysisError::InvalidParameter {
            parameter: "window",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter 'window': must be >= 1, got 0"
        );
        assert!(!err.is_insufficient_data());
    }

    #[test]
    fn error_missing_months() {
        let err = AnalysisError::MissingMonths {
            missing: vec![11, 12],
        };
        assert_eq!(
            err.to_string(),
            "insufficient data: no observations for month(s) [11, 12]; supply at least one full annual cycle"
        );
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn error_zero_seasonal_mean() {
        let err = AnalysisError::ZeroSeasonalMean;
        assert_eq!(
            err.to_string(),
            "insufficient data: mean of monthly means is zero"
        );
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn error_no_defined_level() {
        let err = AnalysisError::NoDefinedLevel { window: 8, len: 5 };
        assert_eq!(
            err.to_string(),
            "insufficient data: window 8 leaves no defined entry in a series of length 5"
        );
        assert!(err.is_insufficient_data());
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<AnalysisError>();
    }
}
