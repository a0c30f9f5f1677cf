//! Flat-level baseline forecast.

use claimcast_calendar::{MonthStart, month_sequence};
use tracing::debug;

use crate::error::AnalysisError;
use crate::smoothing::RollingSeries;

/// A flat forecast: one level repeated over `horizon` future months.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    level: f64,
    dates: Vec<MonthStart>,
}

impl Forecast {
    /// The forecast level, equal to the last defined smoothed value.
    pub fn level(&self) -> f64 {
        self.level
    }

    /// Number of forecast months.
    pub fn horizon(&self) -> usize {
        self.dates.len()
    }

    /// Future timestamps, continuing monthly after the history.
    pub fn dates(&self) -> &[MonthStart] {
        &self.dates
    }

    /// Iterates over the `(timestamp, value)` pairs; every value is the level.
    pub fn iter(&self) -> impl Iterator<Item = (MonthStart, f64)> + '_ {
        self.dates.iter().map(move |&d| (d, self.level))
    }
}

/// Repeats the last defined entry of `rolling` over `horizon` months.
///
/// Timestamps step one calendar month at a time from the last historical
/// timestamp. No trend or seasonality is extrapolated.
///
/// # Errors
///
/// - [`AnalysisError::InvalidParameter`] if `horizon == 0`.
/// - [`AnalysisError::NoDefinedLevel`] if `rolling` has no defined entry.
pub fn baseline_forecast(rolling: &RollingSeries, horizon: usize) -> Result<Forecast, AnalysisError> {
    if horizon == 0 {
        return Err(AnalysisError::InvalidParameter {
            parameter: "horizon",
            value: 0,
        });
    }
    let no_level = || AnalysisError::NoDefinedLevel {
        window: rolling.window(),
        len: rolling.len(),
    };
    let (_, level) = rolling.last_defined().ok_or_else(no_level)?;
    let last = rolling.last_date().ok_or_else(no_level)?;

    let dates = month_sequence(last.next(), horizon);
    debug!(level, horizon, "built baseline forecast");

    Ok(Forecast { level, dates })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::smoothing::rolling_mean;
    use claimcast_series::MonthlySeries;

    fn rolled(values: &[f64], window: usize) -> RollingSeries {
        let start = MonthStart::new(2019, 1).unwrap();
        let s = MonthlySeries::from_start(start, values.to_vec()).unwrap();
        rolling_mean(&s, window).unwrap()
    }

    #[test]
    fn level_is_last_defined_mean() {
        let f = baseline_forecast(&rolled(&[1.0, 2.0, 3.0, 4.0, 5.0], 3), 4).unwrap();
        assert_eq!(f.level(), 4.0);
        assert_eq!(f.horizon(), 4);
        assert!(f.iter().all(|(_, v)| v == 4.0));
    }

    #[test]
    fn dates_continue_after_history() {
        let f = baseline_forecast(&rolled(&[1.0; 12], 6), 3).unwrap();
        let dates: Vec<String> = f.dates().iter().map(ToString::to_string).collect();
        assert_eq!(dates, ["2020-01-01", "2020-02-01", "2020-03-01"]);
    }

    #[test]
    fn zero_horizon_rejected() {
        assert_eq!(
            baseline_forecast(&rolled(&[1.0, 2.0], 1), 0).unwrap_err(),
            AnalysisError::InvalidParameter {
                parameter: "horizon",
                value: 0,
            }
        );
    }

    #[test]
    fn window_longer_than_series_is_insufficient() {
        assert_eq!(
            baseline_forecast(&rolled(&[1.0, 2.0, 3.0], 4), 6).unwrap_err(),
            AnalysisError::NoDefinedLevel { window: 4, len: 3 }
        );
    }
}
