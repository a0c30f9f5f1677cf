//! Error types for the claimcast-pipeline crate.

use claimcast_analysis::AnalysisError;
use claimcast_synth::SynthError;

use crate::report::ReportError;

/// Coarse classification of a failed run, reported to the user alongside
/// the detailed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A count or model parameter violated its constraint.
    InvalidParameter,
    /// Not enough history for decomposition or forecasting.
    InsufficientData,
    /// An input series violated the monthly series invariants.
    MalformedInput,
    /// Boundary I/O failed: a missing file, a reporter, or serialization.
    Io,
}

/// Error type for all fallible operations in the claimcast-pipeline crate.
///
/// Component errors are wrapped transparently: their messages and sources
/// pass through unchanged.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Generation stage failure.
    #[error(transparent)]
    Synth(#[from] SynthError),

    /// Smoothing, decomposition or forecasting failure.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// A reporter rejected an artifact.
    #[error("reporter failed on {artifact}: {source}")]
    Report {
        /// Name of the artifact being reported.
        artifact: &'static str,
        /// Underlying reporter error.
        source: ReportError,
    },

    /// The summary could not be serialized.
    #[error("failed to serialize summary: {reason}")]
    Serialization {
        /// Description of the serializer failure.
        reason: String,
    },
}

impl PipelineError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Synth(SynthError::InvalidParameter { .. }) => ErrorKind::InvalidParameter,
            Self::Analysis(e) if e.is_insufficient_data() => ErrorKind::InsufficientData,
            Self::Analysis(_) => ErrorKind::InvalidParameter,
            Self::Report { .. } | Self::Serialization { .. } => ErrorKind::Io,
        }
    }
}
