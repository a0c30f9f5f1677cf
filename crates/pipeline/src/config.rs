//! Pipeline parameters.

use claimcast_synth::LossModel;

/// Default number of generated months.
pub const DEFAULT_MONTHS: usize = 72;
/// Default generator seed.
pub const DEFAULT_SEED: u64 = 7;
/// Default rolling window in months.
pub const DEFAULT_WINDOW: usize = 6;
/// Default forecast horizon in months.
pub const DEFAULT_HORIZON: usize = 6;

/// Parameters of the generation stage.
///
/// # Example
///
/// ```ignore
/// let cfg = GenerationConfig::new(120, 42).with_model(LossModel::default().with_noise_sd(0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationConfig {
    model: LossModel,
    months: usize,
    seed: u64,
}

impl Default for GenerationConfig {
    /// Default model, 72 months, seed 7.
    fn default() -> Self {
        Self::new(DEFAULT_MONTHS, DEFAULT_SEED)
    }
}

impl GenerationConfig {
    /// Creates a configuration with the default [`LossModel`].
    pub fn new(months: usize, seed: u64) -> Self {
        Self {
            model: LossModel::default(),
            months,
            seed,
        }
    }

    /// Replaces the loss model.
    pub fn with_model(mut self, model: LossModel) -> Self {
        self.model = model;
        self
    }

    /// Returns the loss model.
    pub fn model(&self) -> &LossModel {
        &self.model
    }

    /// Returns the number of months to generate.
    pub fn months(&self) -> usize {
        self.months
    }

    /// Returns the RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Parameters of the analysis stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    window: usize,
    horizon: usize,
}

impl Default for AnalysisConfig {
    /// Window 6, horizon 6.
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW, DEFAULT_HORIZON)
    }
}

impl AnalysisConfig {
    /// Creates an analysis configuration. Values are validated by the
    /// stages that consume them.
    pub fn new(window: usize, horizon: usize) -> Self {
        Self { window, horizon }
    }

    /// Returns the rolling window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Returns the forecast horizon.
    pub fn horizon(&self) -> usize {
        self.horizon
    }
}
