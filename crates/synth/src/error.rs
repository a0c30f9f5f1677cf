//! Error types for the claimcast-synth crate.

/// Error type for all fallible operations in the claimcast-synth crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SynthError {
    /// Returned when a generator parameter violates its constraint.
    #[error("invalid parameter '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Description of the violated constraint.
        reason: String,
    },
}
