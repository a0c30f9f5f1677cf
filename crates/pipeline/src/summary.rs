//! Run summary record.

use serde::Serialize;

use crate::error::PipelineError;

/// Summary handed to external reporting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Rolling window length in months.
    pub window_months: usize,
    /// Last defined rolling mean, which is also the forecast level.
    pub last_smoothed_level: f64,
    /// Number of forecast months.
    pub forecast_horizon_months: usize,
}

impl Summary {
    /// Serializes the summary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, PipelineError> {
        serde_json::to_string_pretty(self).map_err(|e| PipelineError::Serialization {
            reason: e.to_string(),
        })
    }
}
