//! Month-of-year seasonal index.

use claimcast_series::MonthlySeries;
use claimcast_stats::{MeanAccumulator, mean};
use tracing::debug;

use crate::error::AnalysisError;

/// Values grouped by calendar month (1..=12), independent of year.
///
/// Each bucket keeps a running sum and count. Buckets are not weighted
/// against each other: a trailing partial year simply leaves some months
/// with one observation fewer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthBuckets {
    buckets: [MeanAccumulator; 12],
}

impl MonthBuckets {
    /// Creates twelve empty buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Buckets every observation of `series` by its calendar month.
    pub fn from_series(series: &MonthlySeries) -> Self {
        let mut buckets = Self::new();
        for (date, value) in series.iter() {
            buckets.push(date.month(), value);
        }
        buckets
    }

    /// Adds one observation to the bucket of `month` (1..=12).
    ///
    /// # Panics
    ///
    /// Panics if `month` is outside 1..=12.
    pub fn push(&mut self, month: u8, value: f64) {
        assert!(
            (1..=12).contains(&month),
            "month must be 1..=12, got {month}"
        );
        self.buckets[usize::from(month - 1)].push(value);
    }

    /// Number of observations in the bucket of `month`.
    pub fn count(&self, month: u8) -> usize {
        self.bucket(month).map_or(0, MeanAccumulator::count)
    }

    /// Mean of the bucket of `month`, or `None` if it is empty.
    pub fn mean(&self, month: u8) -> Option<f64> {
        self.bucket(month).and_then(MeanAccumulator::mean)
    }

    /// Calendar months whose bucket has no observations.
    pub fn missing_months(&self) -> Vec<u8> {
        (1..=12u8).filter(|&m| self.count(m) == 0).collect()
    }

    /// All twelve bucket means, January first.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingMonths`] if any bucket is empty.
    pub fn means(&self) -> Result<[f64; 12], AnalysisError> {
        let missing = self.missing_months();
        if !missing.is_empty() {
            return Err(AnalysisError::MissingMonths { missing });
        }
        let mut out = [0.0; 12];
        for (slot, acc) in out.iter_mut().zip(&self.buckets) {
            *slot = acc.mean().unwrap_or_default();
        }
        Ok(out)
    }

    fn bucket(&self, month: u8) -> Option<&MeanAccumulator> {
        if (1..=12).contains(&month) {
            Some(&self.buckets[usize::from(month - 1)])
        } else {
            None
        }
    }
}

/// Normalized multiplier per calendar month.
///
/// The unweighted mean of the twelve factors is 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalIndex {
    factors: [f64; 12],
}

impl SeasonalIndex {
    /// Factor for calendar month `month` (1..=12), or `None` if out of range.
    pub fn factor(&self, month: u8) -> Option<f64> {
        if (1..=12).contains(&month) {
            Some(self.factors[usize::from(month - 1)])
        } else {
            None
        }
    }

    /// All twelve factors, January first.
    pub fn factors(&self) -> &[f64; 12] {
        &self.factors
    }

    /// Iterates over `(month, factor)` pairs, January first.
    pub fn iter(&self) -> impl Iterator<Item = (u8, f64)> + '_ {
        (1..=12u8).zip(self.factors.iter().copied())
    }

    /// Unweighted mean of the factors.
    pub fn mean(&self) -> f64 {
        mean(&self.factors)
    }
}

/// Computes the normalized seasonal index of `series`.
///
/// Each value is bucketed by calendar month; each bucket mean is divided by
/// the mean of the twelve bucket means.
///
/// # Errors
///
/// - [`AnalysisError::MissingMonths`] if any calendar month has no
///   observations.
/// - [`AnalysisError::ZeroSeasonalMean`] if every bucket mean is zero.
pub fn seasonal_index(series: &MonthlySeries) -> Result<SeasonalIndex, AnalysisError> {
    let buckets = MonthBuckets::from_series(series);
    let means = buckets.means()?;
    let grand = mean(&means);
    if grand == 0.0 {
        return Err(AnalysisError::ZeroSeasonalMean);
    }

    let mut factors = means;
    for f in &mut factors {
        *f /= grand;
    }
    debug!(grand_mean = grand, "computed seasonal index");

    Ok(SeasonalIndex { factors })
}
