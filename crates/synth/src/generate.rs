//! Loss series generation.

use rand::SeedableRng;
use rand::distr::Bernoulli;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use claimcast_series::MonthlySeries;

use crate::error::SynthError;
use crate::model::LossModel;

/// Generates `months` observations from `model` using a `StdRng` seeded
/// with `seed`.
///
/// # Errors
///
/// See [`generate_with_rng`].
pub fn generate(model: &LossModel, months: usize, seed: u64) -> Result<MonthlySeries, SynthError> {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(model, months, &mut rng)
}

/// Generates `months` observations from `model`, drawing from `rng`.
///
/// The RNG is consumed in the order documented at the crate root: noise,
/// shock gate, then shock magnitude when the gate fires, one month at a
/// time.
///
/// # Errors
///
/// Returns [`SynthError::InvalidParameter`] if `months == 0` or if any model
/// coefficient fails [`LossModel::validate`].
pub fn generate_with_rng<R: rand::Rng + ?Sized>(
    model: &LossModel,
    months: usize,
    rng: &mut R,
) -> Result<MonthlySeries, SynthError> {
    if months == 0 {
        return Err(SynthError::InvalidParameter {
            parameter: "months",
            reason: "must be positive, got 0".to_string(),
        });
    }
    model.validate()?;

    let noise = Normal::new(0.0, model.noise_sd()).map_err(|e| SynthError::InvalidParameter {
        parameter: "noise_sd",
        reason: e.to_string(),
    })?;
    let gate = Bernoulli::new(model.shock_probability()).map_err(|e| {
        SynthError::InvalidParameter {
            parameter: "shock_probability",
            reason: e.to_string(),
        }
    })?;
    let (shock_mean, shock_sd) = model.shock_size();
    let shock = Normal::new(shock_mean, shock_sd).map_err(|e| SynthError::InvalidParameter {
        parameter: "shock_sd",
        reason: e.to_string(),
    })?;

    let mut values = Vec::with_capacity(months);
    let mut n_shocks = 0usize;
    let mut n_floored = 0usize;
    for t in 0..months {
        let eps = noise.sample(rng);
        let spike = if gate.sample(rng) {
            n_shocks += 1;
            shock.sample(rng)
        } else {
            0.0
        };
        let raw = model.trend(t) + model.season(t) + eps + spike;
        if raw < 0.0 {
            n_floored += 1;
        }
        values.push(raw.max(0.0));
    }
    debug!(months, n_shocks, n_floored, "generated loss values");

    MonthlySeries::from_start(model.start(), values).map_err(|e| SynthError::InvalidParameter {
        parameter: "model",
        reason: e.to_string(),
    })
}
