//! Reporting collaborators.

use claimcast_analysis::{Forecast, RollingSeries, SeasonalIndex};
use claimcast_series::MonthlySeries;

use crate::summary::Summary;

/// Error returned by a [`Reporter`].
pub type ReportError = Box<dyn std::error::Error + Send + Sync>;

/// Receives the artifacts of a successful pipeline run.
///
/// Callbacks fire in the order `series`, `rolling`, `seasonal`, `forecast`,
/// `summary`. Every callback defaults to a no-op, so implementors only
/// override the artifacts they consume.
pub trait Reporter {
    /// The raw monthly series.
    fn series(&mut self, _series: &MonthlySeries) -> Result<(), ReportError> {
        Ok(())
    }

    /// The rolling mean alongside the raw series it smooths.
    fn rolling(
        &mut self,
        _series: &MonthlySeries,
        _rolling: &RollingSeries,
    ) -> Result<(), ReportError> {
        Ok(())
    }

    /// The normalized seasonal index.
    fn seasonal(&mut self, _index: &SeasonalIndex) -> Result<(), ReportError> {
        Ok(())
    }

    /// The baseline forecast alongside its history.
    fn forecast(
        &mut self,
        _history: &MonthlySeries,
        _forecast: &Forecast,
    ) -> Result<(), ReportError> {
        Ok(())
    }

    /// The run summary.
    fn summary(&mut self, _summary: &Summary) -> Result<(), ReportError> {
        Ok(())
    }
}

/// A reporter that ignores every artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardReporter;

impl Reporter for DiscardReporter {}
