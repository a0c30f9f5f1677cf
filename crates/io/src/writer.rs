//! CSV writers for series and analysis tables.

use std::fs;
use std::path::Path;

use claimcast_analysis::{Forecast, RollingSeries, SeasonalIndex};
use claimcast_series::MonthlySeries;
use tracing::info;

use crate::error::IoError;

/// Writes `series` as a `date,loss` CSV.
///
/// Values use Rust's shortest round-trip float formatting, so reading the
/// file back reproduces the series exactly.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::CsvIo`] on write failure.
pub fn write_series_csv(path: &Path, series: &MonthlySeries) -> Result<(), IoError> {
    let mut w = create(path)?;
    w.write_record(["date", "loss"])?;
    for (date, value) in series.iter() {
        w.write_record([date.to_string(), value.to_string()])?;
    }
    finish(w, path)?;
    info!(path = %path.display(), rows = series.len(), "wrote loss series");
    Ok(())
}

/// Writes the raw series and its rolling mean as `date,loss,roll_mean`.
///
/// Undefined rolling entries are left empty.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::CsvIo`] on write failure.
pub fn write_rolling_csv(
    path: &Path,
    series: &MonthlySeries,
    rolling: &RollingSeries,
) -> Result<(), IoError> {
    let mut w = create(path)?;
    w.write_record(["date", "loss", "roll_mean"])?;
    for ((date, value), smoothed) in series.iter().zip(rolling.values()) {
        let smoothed = smoothed.map(|v| v.to_string()).unwrap_or_default();
        w.write_record([date.to_string(), value.to_string(), smoothed])?;
    }
    finish(w, path)?;
    info!(path = %path.display(), window = rolling.window(), "wrote rolling mean");
    Ok(())
}

/// Writes the seasonal index as `month,index`, January first.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::CsvIo`] on write failure.
pub fn write_seasonal_csv(path: &Path, index: &SeasonalIndex) -> Result<(), IoError> {
    let mut w = create(path)?;
    w.write_record(["month", "index"])?;
    for (month, factor) in index.iter() {
        w.write_record([month.to_string(), factor.to_string()])?;
    }
    finish(w, path)?;
    info!(path = %path.display(), "wrote seasonal index");
    Ok(())
}

/// Writes the forecast as `date,forecast`.
///
/// # Errors
///
/// Returns [`IoError::Io`] or [`IoError::CsvIo`] on write failure.
pub fn write_forecast_csv(path: &Path, forecast: &Forecast) -> Result<(), IoError> {
    let mut w = create(path)?;
    w.write_record(["date", "forecast"])?;
    for (date, value) in forecast.iter() {
        w.write_record([date.to_string(), value.to_string()])?;
    }
    finish(w, path)?;
    info!(path = %path.display(), horizon = forecast.horizon(), "wrote forecast");
    Ok(())
}

/// Creates parent directories and opens a CSV writer on `path`.
pub(crate) fn create(path: &Path) -> Result<csv::Writer<fs::File>, IoError> {
    create_parent(path)?;
    let file = fs::File::create(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(csv::Writer::from_writer(file))
}

/// Creates the parent directory of `path` if it has one.
pub(crate) fn create_parent(path: &Path) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| IoError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

fn finish(mut w: csv::Writer<fs::File>, path: &Path) -> Result<(), IoError> {
    w.flush().map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })
}
