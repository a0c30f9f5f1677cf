//! Filesystem reporter for pipeline artifacts.

use std::fs;
use std::path::{Path, PathBuf};

use claimcast_analysis::{Forecast, RollingSeries, SeasonalIndex};
use claimcast_pipeline::{ReportError, Reporter, Summary};
use claimcast_series::MonthlySeries;
use tracing::info;

use crate::error::IoError;
use crate::writer::{
    create_parent, write_forecast_csv, write_rolling_csv, write_seasonal_csv, write_series_csv,
};

/// Writes every pipeline artifact into an output directory.
///
/// | Artifact | File |
/// |----------|------|
/// | raw series | `monthly_losses.csv` |
/// | rolling mean | `rolling_mean.csv` |
/// | seasonal index | `seasonal_index.csv` |
/// | forecast | `forecast.csv` |
/// | summary | `summary.json` (or the path set with [`with_summary_path`](Self::with_summary_path)) |
#[derive(Debug, Clone)]
pub struct ArtifactReporter {
    out_dir: PathBuf,
    summary_path: Option<PathBuf>,
    written: Vec<PathBuf>,
}

impl ArtifactReporter {
    /// Creates a reporter writing into `out_dir`. The directory is created
    /// on first write.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            summary_path: None,
            written: Vec::new(),
        }
    }

    /// Writes the summary to `path` instead of `<out_dir>/summary.json`.
    pub fn with_summary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.summary_path = Some(path.into());
        self
    }

    /// Returns the output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Paths written so far, in order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn path(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }

    fn track(&mut self, path: PathBuf) {
        self.written.push(path);
    }
}

impl Reporter for ArtifactReporter {
    fn series(&mut self, series: &MonthlySeries) -> Result<(), ReportError> {
        let path = self.path("monthly_losses.csv");
        write_series_csv(&path, series)?;
        self.track(path);
        Ok(())
    }

    fn rolling(&mut self, series: &MonthlySeries, rolling: &RollingSeries) -> Result<(), ReportError> {
        let path = self.path("rolling_mean.csv");
        write_rolling_csv(&path, series, rolling)?;
        self.track(path);
        Ok(())
    }

    fn seasonal(&mut self, index: &SeasonalIndex) -> Result<(), ReportError> {
        let path = self.path("seasonal_index.csv");
        write_seasonal_csv(&path, index)?;
        self.track(path);
        Ok(())
    }

    fn forecast(&mut self, _history: &MonthlySeries, forecast: &Forecast) -> Result<(), ReportError> {
        let path = self.path("forecast.csv");
        write_forecast_csv(&path, forecast)?;
        self.track(path);
        Ok(())
    }

    fn summary(&mut self, summary: &Summary) -> Result<(), ReportError> {
        let path = self
            .summary_path
            .clone()
            .unwrap_or_else(|| self.path("summary.json"));
        let json = summary.to_json().map_err(|e| IoError::Serialization {
            reason: e.to_string(),
        })?;
        create_parent(&path)?;
        fs::write(&path, json).map_err(|source| IoError::Io {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote summary");
        self.track(path);
        Ok(())
    }
}
