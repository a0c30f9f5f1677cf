//! Loss model coefficients.

use std::f64::consts::PI;

use claimcast_calendar::MonthStart;

use crate::error::SynthError;

/// Seasonal period in months.
const PERIOD: f64 = 12.0;

/// Coefficients of the synthetic loss model.
///
/// Use the builder methods to override individual coefficients.
///
/// # Example
///
/// ```ignore
/// use claimcast_synth::LossModel;
///
/// let model = LossModel::default()
///     .with_noise_sd(0.0)
///     .with_shock_probability(0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LossModel {
    start: MonthStart,
    intercept: f64,
    slope: f64,
    sin_amplitude: f64,
    cos_amplitude: f64,
    noise_sd: f64,
    shock_probability: f64,
    shock_mean: f64,
    shock_sd: f64,
}

impl Default for LossModel {
    /// Defaults: start January 2019, trend `100_000 + 1_200 t`, season
    /// `15_000 sin + 8_000 cos`, noise sd `9_000`, shocks with probability
    /// `0.06` drawn from `Normal(45_000, 18_000)`.
    fn default() -> Self {
        Self {
            start: MonthStart::new(2019, 1).expect("January is a valid month"),
            intercept: 100_000.0,
            slope: 1_200.0,
            sin_amplitude: 15_000.0,
            cos_amplitude: 8_000.0,
            noise_sd: 9_000.0,
            shock_probability: 0.06,
            shock_mean: 45_000.0,
            shock_sd: 18_000.0,
        }
    }
}

impl LossModel {
    /// Sets the month of the first generated observation.
    pub fn with_start(mut self, start: MonthStart) -> Self {
        self.start = start;
        self
    }

    /// Sets the trend line `intercept + slope * t`.
    pub fn with_trend(mut self, intercept: f64, slope: f64) -> Self {
        self.intercept = intercept;
        self.slope = slope;
        self
    }

    /// Sets the sine and cosine amplitudes of the annual cycle.
    pub fn with_season(mut self, sin_amplitude: f64, cos_amplitude: f64) -> Self {
        self.sin_amplitude = sin_amplitude;
        self.cos_amplitude = cos_amplitude;
        self
    }

    /// Sets the standard deviation of the monthly noise.
    pub fn with_noise_sd(mut self, noise_sd: f64) -> Self {
        self.noise_sd = noise_sd;
        self
    }

    /// Sets the per-month probability of a shock.
    pub fn with_shock_probability(mut self, p: f64) -> Self {
        self.shock_probability = p;
        self
    }

    /// Sets the shock magnitude distribution `Normal(mean, sd)`.
    pub fn with_shock_size(mut self, mean: f64, sd: f64) -> Self {
        self.shock_mean = mean;
        self.shock_sd = sd;
        self
    }

    /// Returns the month of the first observation.
    pub fn start(&self) -> MonthStart {
        self.start
    }

    /// Returns the trend intercept.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Returns the trend slope per month.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the seasonal `(sin, cos)` amplitudes.
    pub fn season_amplitudes(&self) -> (f64, f64) {
        (self.sin_amplitude, self.cos_amplitude)
    }

    /// Returns the noise standard deviation.
    pub fn noise_sd(&self) -> f64 {
        self.noise_sd
    }

    /// Returns the shock probability.
    pub fn shock_probability(&self) -> f64 {
        self.shock_probability
    }

    /// Returns the shock magnitude `(mean, sd)`.
    pub fn shock_size(&self) -> (f64, f64) {
        (self.shock_mean, self.shock_sd)
    }

    /// Deterministic trend component at time index `t`.
    pub fn trend(&self, t: usize) -> f64 {
        self.intercept + self.slope * t as f64
    }

    /// Deterministic seasonal component at time index `t`.
    pub fn season(&self, t: usize) -> f64 {
        let angle = 2.0 * PI * t as f64 / PERIOD;
        self.sin_amplitude * angle.sin() + self.cos_amplitude * angle.cos()
    }

    /// Checks every coefficient against its constraint.
    ///
    /// # Errors
    ///
    /// Returns [`SynthError::InvalidParameter`] naming the first offending
    /// coefficient.
    pub fn validate(&self) -> Result<(), SynthError> {
        let finite = [
            ("trend_intercept", self.intercept),
            ("trend_slope", self.slope),
            ("season_sin", self.sin_amplitude),
            ("season_cos", self.cos_amplitude),
            ("shock_mean", self.shock_mean),
        ];
        for (parameter, value) in finite {
            if !value.is_finite() {
                return Err(invalid(parameter, format!("must be finite, got {value}")));
            }
        }
        if self.slope <= 0.0 {
            return Err(invalid(
                "trend_slope",
                format!("trend must be strictly increasing, got slope {}", self.slope),
            ));
        }
        for (parameter, value) in [("noise_sd", self.noise_sd), ("shock_sd", self.shock_sd)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(
                    parameter,
                    format!("must be finite and >= 0, got {value}"),
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.shock_probability) {
            return Err(invalid(
                "shock_probability",
                format!("must be in [0, 1], got {}", self.shock_probability),
            ));
        }
        Ok(())
    }
}

fn invalid(parameter: &'static str, reason: String) -> SynthError {
    SynthError::InvalidParameter { parameter, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_is_valid() {
        assert!(LossModel::default().validate().is_ok());
    }

    #[test]
    fn trend_is_linear() {
        let model = LossModel::default();
        assert_relative_eq!(model.trend(0), 100_000.0);
        assert_relative_eq!(model.trend(10), 112_000.0);
    }

    #[test]
    fn season_has_period_twelve() {
        let model = LossModel::default();
        for t in 0..12 {
            assert_relative_eq!(model.season(t), model.season(t + 12), epsilon = 1e-6);
        }
        assert_relative_eq!(model.season(0), 8_000.0, epsilon = 1e-9);
        assert_relative_eq!(model.season(3), 15_000.0, epsilon = 1e-6);
    }

    #[test]
    fn zero_amplitude_season_is_flat() {
        let model = LossModel::default().with_season(0.0, 0.0);
        for t in 0..24 {
            assert_eq!(model.season(t), 0.0);
        }
    }

    #[test]
    fn rejects_flat_trend() {
        let err = LossModel::default().with_trend(1.0, 0.0).validate().unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidParameter {
                parameter: "trend_slope",
                ..
            }
        ));
    }

    #[test]
    fn rejects_negative_noise() {
        let err = LossModel::default().with_noise_sd(-1.0).validate().unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidParameter {
                parameter: "noise_sd",
                ..
            }
        ));
    }

    #[test]
    fn rejects_probability_above_one() {
        let err = LossModel::default()
            .with_shock_probability(1.5)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidParameter {
                parameter: "shock_probability",
                ..
            }
        ));
    }

    #[test]
    fn rejects_nan_shock_sd() {
        let err = LossModel::default()
            .with_shock_size(45_000.0, f64::NAN)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            SynthError::InvalidParameter {
                parameter: "shock_sd",
                ..
            }
        ));
    }
}
