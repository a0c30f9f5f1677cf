//! # claimcast-io
//!
//! Read monthly loss series from CSV and write pipeline artifacts.
//! Bridges external tabular files into the validated
//! [`MonthlySeries`](claimcast_series::MonthlySeries) used by the core.
//!
//! | Function / type | Direction | Format |
//! |-----------------|-----------|--------|
//! | [`read_series_csv`] | in | `date,loss` CSV |
//! | [`write_series_csv`] | out | `date,loss` CSV |
//! | [`ArtifactReporter`] | out | CSV tables + `summary.json` |

mod artifacts;
mod error;
mod reader;
mod writer;

pub use artifacts::ArtifactReporter;
pub use error::IoError;
pub use reader::{ReaderConfig, parse_series_csv, read_series_csv};
pub use writer::{write_forecast_csv, write_rolling_csv, write_seasonal_csv, write_series_csv};
