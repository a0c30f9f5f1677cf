//! Monthly loss series.

use claimcast_calendar::{MonthStart, month_sequence};

use crate::error::SeriesError;
use crate::validate::{ValidationCollector, validate_monthly_steps, validate_values};

/// An immutable monthly series of non-negative loss amounts.
///
/// Invariants, enforced by every constructor:
/// - at least one observation;
/// - timestamps strictly increasing one calendar month at a time;
/// - all values finite and `>= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlySeries {
    dates: Vec<MonthStart>,
    values: Vec<f64>,
}

impl MonthlySeries {
    /// Builds a series from parallel timestamp and value columns.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::Empty`] if both columns are empty.
    /// - [`SeriesError::LengthMismatch`] if the columns differ in length.
    /// - [`SeriesError::Validation`] listing every gap, duplicate,
    ///   out-of-order timestamp and negative or non-finite value.
    pub fn new(dates: Vec<MonthStart>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if dates.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                dates: dates.len(),
                values: values.len(),
            });
        }
        if values.is_empty() {
            return Err(SeriesError::Empty);
        }

        let mut c = ValidationCollector::new();
        c.extend(validate_monthly_steps(&dates));
        c.extend(validate_values(&values));
        c.finish()?;

        Ok(Self { dates, values })
    }

    /// Builds a series whose timestamps run monthly from `start`.
    ///
    /// # Errors
    ///
    /// [`SeriesError::Empty`] for no values, [`SeriesError::Validation`]
    /// for negative or non-finite values.
    pub fn from_start(start: MonthStart, values: Vec<f64>) -> Result<Self, SeriesError> {
        if values.is_empty() {
            return Err(SeriesError::Empty);
        }
        validate_values(&values).finish()?;
        let dates = month_sequence(start, values.len());
        Ok(Self { dates, values })
    }

    /// Number of observations (always at least 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the timestamps.
    pub fn dates(&self) -> &[MonthStart] {
        &self.dates
    }

    /// Returns the loss values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// First timestamp.
    pub fn first_date(&self) -> MonthStart {
        self.dates[0]
    }

    /// Last timestamp.
    pub fn last_date(&self) -> MonthStart {
        self.dates[self.dates.len() - 1]
    }

    /// Iterates over `(timestamp, value)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (MonthStart, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(year: i32, month: u32) -> MonthStart {
        MonthStart::new(year, month).unwrap()
    }

    #[test]
    fn from_start_builds_contiguous_dates() {
        let s = MonthlySeries::from_start(m(2019, 11), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.len(), 3);
        assert!(!s.is_empty());
        assert_eq!(s.first_date(), m(2019, 11));
        assert_eq!(s.last_date(), m(2020, 1));
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            MonthlySeries::from_start(m(2019, 1), vec![]).unwrap_err(),
            SeriesError::Empty
        );
        assert_eq!(
            MonthlySeries::new(vec![], vec![]).unwrap_err(),
            SeriesError::Empty
        );
    }

    #[test]
    fn length_mismatch_rejected() {
        let err = MonthlySeries::new(vec![m(2019, 1)], vec![1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            SeriesError::LengthMismatch {
                dates: 1,
                values: 2,
            }
        );
    }

    #[test]
    fn gaps_and_negatives_reported_together() {
        let err = MonthlySeries::new(vec![m(2019, 1), m(2019, 3)], vec![1.0, -1.0]).unwrap_err();
        match err {
            SeriesError::Validation { count, .. } => assert_eq!(count, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn iter_pairs_dates_with_values() {
        let s = MonthlySeries::from_start(m(2019, 12), vec![5.0, 6.0]).unwrap();
        let pairs: Vec<_> = s.iter().collect();
        assert_eq!(pairs, vec![(m(2019, 12), 5.0), (m(2020, 1), 6.0)]);
    }
}
