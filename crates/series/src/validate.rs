//! Accumulated validation of series invariants.
//!
//! Provides [`ValidationCollector`] for gathering every violation into a
//! single [`SeriesError::Validation`], plus the checks run by the
//! [`MonthlySeries`](crate::MonthlySeries) constructors.

use claimcast_calendar::MonthStart;

use crate::error::SeriesError;

/// Accumulates validation errors and converts them into a single
/// [`SeriesError::Validation`].
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Moves every message of `other` into `self`.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), SeriesError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(SeriesError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that each timestamp is exactly one month after its predecessor.
///
/// Records one message per offending pair, distinguishing duplicates,
/// out-of-order rows and skipped months.
pub(crate) fn validate_monthly_steps(dates: &[MonthStart]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, pair) in dates.windows(2).enumerate() {
        let (prev, cur) = (pair[0], pair[1]);
        match prev.months_until(cur) {
            1 => {}
            0 => c.push(format!("duplicate month {cur} at index {}", i + 1)),
            step if step < 0 => c.push(format!(
                "month {cur} at index {} precedes {prev}",
                i + 1
            )),
            step => c.push(format!(
                "{} month(s) missing between {prev} and {cur}",
                step - 1
            )),
        }
    }

    c
}

/// Check that every loss value is finite and non-negative.
pub(crate) fn validate_values(values: &[f64]) -> ValidationCollector {
    let mut c = ValidationCollector::new();

    for (i, &val) in values.iter().enumerate() {
        if !val.is_finite() {
            c.push(format!("non-finite loss at index {i}: {val}"));
        } else if val < 0.0 {
            c.push(format!("negative loss at index {i}: {val}"));
        }
    }

    c
}
