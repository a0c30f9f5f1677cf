//! Trailing rolling-mean smoothing.

use claimcast_calendar::MonthStart;
use claimcast_series::MonthlySeries;
use claimcast_stats::mean;
use tracing::debug;

use crate::error::AnalysisError;

/// A rolling mean aligned with the timestamps of its source series.
///
/// The first `window - 1` entries are `None`: partial windows are never
/// averaged.
#[derive(Debug, Clone, PartialEq)]
pub struct RollingSeries {
    dates: Vec<MonthStart>,
    values: Vec<Option<f64>>,
    window: usize,
}

impl RollingSeries {
    /// Returns the window length used to build this series.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of entries, equal to the source series length.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the timestamps, identical to the source series.
    pub fn dates(&self) -> &[MonthStart] {
        &self.dates
    }

    /// Returns every entry, `None` where the window is incomplete.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Last timestamp of the source series.
    pub fn last_date(&self) -> Option<MonthStart> {
        self.dates.last().copied()
    }

    /// Number of defined entries.
    pub fn n_defined(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    /// Iterates over the defined `(timestamp, mean)` pairs.
    pub fn defined(&self) -> impl Iterator<Item = (MonthStart, f64)> + '_ {
        self.dates
            .iter()
            .zip(&self.values)
            .filter_map(|(&d, v)| v.map(|x| (d, x)))
    }

    /// The last defined `(timestamp, mean)` pair, if any.
    pub fn last_defined(&self) -> Option<(MonthStart, f64)> {
        self.dates
            .iter()
            .zip(&self.values)
            .rev()
            .find_map(|(&d, v)| v.map(|x| (d, x)))
    }
}

/// Computes the trailing rolling mean of `series` over `window` months.
///
/// Entry `i` equals the mean of the raw values at `i - window + 1 ..= i`
/// and is defined only for `i >= window - 1`. A window longer than the
/// series yields a result with no defined entries.
///
/// # Errors
///
/// Returns [`AnalysisError::InvalidParameter`] if `window == 0`.
pub fn rolling_mean(series: &MonthlySeries, window: usize) -> Result<RollingSeries, AnalysisError> {
    if window == 0 {
        return Err(AnalysisError::InvalidParameter {
            parameter: "window",
            value: 0,
        });
    }

    let raw = series.values();
    let n_undefined = (window - 1).min(raw.len());
    let mut values: Vec<Option<f64>> = vec![None; n_undefined];
    values.extend(raw.windows(window).map(|w| Some(mean(w))));

    debug!(
        window,
        len = values.len(),
        n_defined = values.len() - n_undefined,
        "computed rolling mean"
    );

    Ok(RollingSeries {
        dates: series.dates().to_vec(),
        values,
        window,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> MonthlySeries {
        let start = MonthStart::new(2019, 1).unwrap();
        MonthlySeries::from_start(start, values.to_vec()).unwrap()
    }

    #[test]
    fn window_three_over_one_to_five() {
        let r = rolling_mean(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3).unwrap();
        assert_eq!(r.values(), &[None, None, Some(2.0), Some(3.0), Some(4.0)]);
        assert_eq!(r.window(), 3);
    }

    #[test]
    fn window_one_is_identity() {
        let raw = [3.5, 0.0, 7.25, 1.0];
        let r = rolling_mean(&series(&raw), 1).unwrap();
        let out: Vec<f64> = r.values().iter().map(|v| v.unwrap()).collect();
        assert_eq!(out, raw);
    }

    #[test]
    fn window_zero_rejected() {
        assert_eq!(
            rolling_mean(&series(&[1.0]), 0).unwrap_err(),
            AnalysisError::InvalidParameter {
                parameter: "window",
                value: 0,
            }
        );
    }

    #[test]
    fn window_equal_to_length_has_one_defined_entry() {
        let r = rolling_mean(&series(&[2.0, 4.0, 6.0]), 3).unwrap();
        assert_eq!(r.n_defined(), 1);
        assert_eq!(r.last_defined().map(|(_, v)| v), Some(4.0));
    }

    #[test]
    fn window_longer_than_series_has_none_defined() {
        let r = rolling_mean(&series(&[2.0, 4.0]), 5).unwrap();
        assert_eq!(r.len(), 2);
        assert_eq!(r.n_defined(), 0);
        assert!(r.last_defined().is_none());
    }

    #[test]
    fn dates_follow_source() {
        let s = series(&[1.0, 2.0, 3.0]);
        let r = rolling_mean(&s, 2).unwrap();
        assert_eq!(r.dates(), s.dates());
        assert_eq!(r.last_date(), Some(s.last_date()));
        let defined: Vec<_> = r.defined().map(|(d, _)| d).collect();
        assert_eq!(defined, s.dates()[1..].to_vec());
    }
}
