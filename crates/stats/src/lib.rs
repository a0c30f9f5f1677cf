//! Descriptive statistics helpers for claimcast series.

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation (N-1 denominator); `0.0` below two values.
///
/// Used to check generated noise against the model's `noise_sd`.
pub fn sd(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| (x - m).powi(2)).sum();
    (ss / (data.len() - 1) as f64).sqrt()
}

/// Running-sum accumulator for a mean over values that arrive one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MeanAccumulator {
    sum: f64,
    count: usize,
}

impl MeanAccumulator {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one observation.
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// Number of observations pushed so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` when nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the pushed observations, or `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn mean_of_losses() {
        assert_relative_eq!(mean(&[100.0, 250.0, 400.0, 50.0]), 200.0);
    }

    #[test]
    fn mean_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn sd_uses_n_minus_one() {
        // deviations -1.5, -0.5, 0.5, 1.5 -> sum of squares 5, / 3
        assert_relative_eq!(sd(&[1.0, 2.0, 3.0, 4.0]), (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn sd_of_constant_is_zero() {
        assert_eq!(sd(&[7.5; 10]), 0.0);
    }

    #[test]
    fn sd_needs_two_values() {
        assert_eq!(sd(&[]), 0.0);
        assert_eq!(sd(&[3.0]), 0.0);
    }

    #[test]
    fn accumulator_starts_empty() {
        let acc = MeanAccumulator::new();
        assert!(acc.is_empty());
        assert_eq!(acc.count(), 0);
        assert_eq!(acc.mean(), None);
    }

    #[test]
    fn accumulator_agrees_with_mean() {
        let data = [1.5, 2.5, 10.0, 0.0];
        let mut acc = MeanAccumulator::new();
        for &x in &data {
            acc.push(x);
        }
        assert_eq!(acc.count(), 4);
        assert_relative_eq!(acc.mean().unwrap(), mean(&data), epsilon = 1e-12);
    }
}
