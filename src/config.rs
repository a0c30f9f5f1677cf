use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "claimcast.toml";

/// Top-level claimcast configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClaimcastConfig {
    /// Generator settings.
    #[serde(default)]
    pub generator: GeneratorToml,

    /// Analysis settings.
    #[serde(default)]
    pub analysis: AnalysisToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

impl ClaimcastConfig {
    /// Loads the configuration.
    ///
    /// An explicit `path` must exist. Without one, `./claimcast.toml` is
    /// read if present and built-in defaults apply otherwise.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Path::new(DEFAULT_CONFIG_FILE),
            None => return Ok(Self::default()),
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_toml(&text)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))
    }

    /// Parses a configuration from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorToml {
    #[serde(default = "default_months")]
    pub months: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_start_month")]
    pub start_month: u32,
    #[serde(default)]
    pub model: ModelToml,
}

impl Default for GeneratorToml {
    fn default() -> Self {
        Self {
            months: default_months(),
            seed: default_seed(),
            start_year: default_start_year(),
            start_month: default_start_month(),
            model: ModelToml::default(),
        }
    }
}

fn default_months() -> usize {
    72
}
fn default_seed() -> u64 {
    7
}
fn default_start_year() -> i32 {
    2019
}
fn default_start_month() -> u32 {
    1
}

/// Optional overrides of the loss model coefficients.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    pub intercept: Option<f64>,
    pub slope: Option<f64>,
    pub sin_amplitude: Option<f64>,
    pub cos_amplitude: Option<f64>,
    pub noise_sd: Option<f64>,
    pub shock_probability: Option<f64>,
    pub shock_mean: Option<f64>,
    pub shock_sd: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisToml {
    #[serde(default = "default_window")]
    pub window: usize,
    #[serde(default = "default_horizon")]
    pub horizon: usize,
}

impl Default for AnalysisToml {
    fn default() -> Self {
        Self {
            window: default_window(),
            horizon: default_horizon(),
        }
    }
}

fn default_window() -> usize {
    6
}
fn default_horizon() -> usize {
    6
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_data")]
    pub data: PathBuf,
    #[serde(default = "default_outdir")]
    pub outdir: PathBuf,
    #[serde(default = "default_summary")]
    pub summary: PathBuf,
    #[serde(default = "default_date_column")]
    pub date_column: String,
    #[serde(default = "default_loss_column")]
    pub loss_column: String,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            data: default_data(),
            outdir: default_outdir(),
            summary: default_summary(),
            date_column: default_date_column(),
            loss_column: default_loss_column(),
        }
    }
}

fn default_data() -> PathBuf {
    PathBuf::from("data/monthly_losses.csv")
}
fn default_outdir() -> PathBuf {
    PathBuf::from("plots")
}
fn default_summary() -> PathBuf {
    PathBuf::from("data/summary.json")
}
fn default_date_column() -> String {
    "date".to_string()
}
fn default_loss_column() -> String {
    "loss".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg = ClaimcastConfig::from_toml("").unwrap();
        assert_eq!(cfg.generator.months, 72);
        assert_eq!(cfg.generator.seed, 7);
        assert_eq!(cfg.analysis.window, 6);
        assert_eq!(cfg.analysis.horizon, 6);
        assert_eq!(cfg.io.data, PathBuf::from("data/monthly_losses.csv"));
        assert_eq!(cfg.io.summary, PathBuf::from("data/summary.json"));
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = ClaimcastConfig::from_toml(
            r#"
            [generator]
            months = 120
            seed = 42

            [generator.model]
            noise_sd = 0.0

            [analysis]
            window = 12

            [io]
            outdir = "out"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.generator.months, 120);
        assert_eq!(cfg.generator.seed, 42);
        assert_eq!(cfg.generator.model.noise_sd, Some(0.0));
        assert_eq!(cfg.generator.model.slope, None);
        assert_eq!(cfg.analysis.window, 12);
        assert_eq!(cfg.analysis.horizon, 6);
        assert_eq!(cfg.io.outdir, PathBuf::from("out"));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(ClaimcastConfig::from_toml("[analysis]\nwindw = 3\n").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ClaimcastConfig::load(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
