//! CSV reader for monthly loss series.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{Datelike, NaiveDate};
use claimcast_calendar::MonthStart;
use claimcast_series::MonthlySeries;
use tracing::{debug, info};

use crate::error::IoError;

/// Column names of the input CSV.
///
/// The [`Default`] implementation expects a `date` and a `loss` column.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    date_column: String,
    loss_column: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".into(),
            loss_column: "loss".into(),
        }
    }
}

impl ReaderConfig {
    /// Sets the name of the date column.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Sets the name of the loss column.
    pub fn with_loss_column(mut self, name: impl Into<String>) -> Self {
        self.loss_column = name.into();
        self
    }

    /// Returns the date column name.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the loss column name.
    pub fn loss_column(&self) -> &str {
        &self.loss_column
    }
}

/// Reads a monthly loss series from the CSV file at `path`.
///
/// See [`parse_series_csv`] for the accepted format.
///
/// # Errors
///
/// [`IoError::FileNotFound`] if `path` does not exist, [`IoError::Io`] if
/// it cannot be opened, otherwise any error of [`parse_series_csv`].
pub fn read_series_csv(path: &Path, config: &ReaderConfig) -> Result<MonthlySeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let series = parse_series_csv(file, config)?;
    info!(
        path = %path.display(),
        months = series.len(),
        first = %series.first_date(),
        last = %series.last_date(),
        "read loss series"
    );
    Ok(series)
}

/// Parses a monthly loss series from CSV text.
///
/// The header must contain the configured date and loss columns; other
/// columns are ignored. Dates are ISO `YYYY-MM-DD` on the first of the
/// month. Rows may appear in any order: they are sorted by date before the
/// series invariants are checked.
///
/// # Errors
///
/// - [`IoError::MissingColumn`] if a configured column is absent.
/// - [`IoError::InvalidDate`] / [`IoError::InvalidLoss`] for unparsable cells.
/// - [`IoError::Series`] if the sorted rows are empty, duplicated, gapped,
///   or contain negative losses.
pub fn parse_series_csv<R: Read>(reader: R, config: &ReaderConfig) -> Result<MonthlySeries, IoError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
            })
    };
    let date_idx = column(config.date_column())?;
    let loss_idx = column(config.loss_column())?;

    let mut rows: Vec<(MonthStart, f64)> = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let row = i + 1;
        let date_cell = record.get(date_idx).unwrap_or_default();
        let loss_cell = record.get(loss_idx).unwrap_or_default();
        rows.push((parse_date(row, date_cell)?, parse_loss(row, loss_cell)?));
    }
    debug!(n_rows = rows.len(), "parsed csv rows");

    rows.sort_by_key(|&(date, _)| date);
    let (dates, values): (Vec<_>, Vec<_>) = rows.into_iter().unzip();
    Ok(MonthlySeries::new(dates, values)?)
}

fn parse_date(row: usize, cell: &str) -> Result<MonthStart, IoError> {
    let invalid = |reason: String| IoError::InvalidDate {
        row,
        value: cell.to_string(),
        reason,
    };
    // Accept a trailing time component, as written by dataframe exports.
    let day_part = cell.split([' ', 'T']).next().unwrap_or(cell);
    let date =
        NaiveDate::parse_from_str(day_part, "%Y-%m-%d").map_err(|e| invalid(e.to_string()))?;
    MonthStart::from_ymd(date.year(), date.month(), date.day()).map_err(|e| invalid(e.to_string()))
}

fn parse_loss(row: usize, cell: &str) -> Result<f64, IoError> {
    cell.parse::<f64>().map_err(|_| IoError::InvalidLoss {
        row,
        value: cell.to_string(),
    })
}
