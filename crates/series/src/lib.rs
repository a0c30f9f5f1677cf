//! # claimcast-series
//!
//! The validated monthly time series shared by every stage of the pipeline.
//!
//! A [`MonthlySeries`] is a non-empty run of `(MonthStart, f64)` pairs with
//! strictly increasing, gap-free monthly timestamps and finite,
//! non-negative loss values. Every constructor checks these invariants, so
//! downstream transforms never re-validate.
//!
//! ```ignore
//! use claimcast_calendar::MonthStart;
//! use claimcast_series::MonthlySeries;
//!
//! let start = MonthStart::new(2019, 1)?;
//! let series = MonthlySeries::from_start(start, vec![1.0, 2.0, 3.0])?;
//! assert_eq!(series.last_date().to_string(), "2019-03-01");
//! ```

mod error;
mod series;
mod validate;

pub use error::SeriesError;
pub use series::MonthlySeries;
