//! Pure conversion functions: TOML config structs + CLI overrides -> crate
//! API config types.

use std::path::PathBuf;

use anyhow::{Context, Result};

use claimcast_calendar::MonthStart;
use claimcast_io::{ArtifactReporter, ReaderConfig};
use claimcast_pipeline::{AnalysisConfig, GenerationConfig};
use claimcast_synth::LossModel;

use crate::cli::{AnalysisArgs, GeneratorArgs};
use crate::config::*;

/// Builds a [`LossModel`] from the TOML generator section.
///
/// Coefficients left unset keep the model defaults.
pub fn build_loss_model(generator: &GeneratorToml) -> Result<LossModel> {
    let start = MonthStart::new(generator.start_year, generator.start_month)
        .context("invalid [generator] start_year/start_month")?;
    let defaults = LossModel::default();
    let m = &generator.model;
    let (shock_mean, shock_sd) = defaults.shock_size();
    let (sin_amplitude, cos_amplitude) = defaults.season_amplitudes();

    Ok(defaults
        .clone()
        .with_start(start)
        .with_trend(
            m.intercept.unwrap_or(defaults.intercept()),
            m.slope.unwrap_or(defaults.slope()),
        )
        .with_season(
            m.sin_amplitude.unwrap_or(sin_amplitude),
            m.cos_amplitude.unwrap_or(cos_amplitude),
        )
        .with_noise_sd(m.noise_sd.unwrap_or(defaults.noise_sd()))
        .with_shock_probability(m.shock_probability.unwrap_or(defaults.shock_probability()))
        .with_shock_size(
            m.shock_mean.unwrap_or(shock_mean),
            m.shock_sd.unwrap_or(shock_sd),
        ))
}

/// Builds a [`GenerationConfig`], letting CLI flags override the file.
pub fn build_generation_config(
    generator: &GeneratorToml,
    args: &GeneratorArgs,
) -> Result<GenerationConfig> {
    let model = build_loss_model(generator)?;
    let months = args.months.unwrap_or(generator.months);
    let seed = args.seed.unwrap_or(generator.seed);
    Ok(GenerationConfig::new(months, seed).with_model(model))
}

/// Builds an [`AnalysisConfig`], letting CLI flags override the file.
pub fn build_analysis_config(analysis: &AnalysisToml, args: &AnalysisArgs) -> AnalysisConfig {
    AnalysisConfig::new(
        args.window.unwrap_or(analysis.window),
        args.horizon.unwrap_or(analysis.horizon),
    )
}

/// Builds a [`ReaderConfig`] from the TOML I/O section.
pub fn build_reader_config(io: &IoToml) -> ReaderConfig {
    ReaderConfig::default()
        .with_date_column(&io.date_column)
        .with_loss_column(&io.loss_column)
}

/// Builds the artifact reporter for `analyze` and `run`.
pub fn build_reporter(io: &IoToml, args: &AnalysisArgs) -> ArtifactReporter {
    let outdir: PathBuf = args.outdir.clone().unwrap_or_else(|| io.outdir.clone());
    let summary = args.summary.clone().unwrap_or_else(|| io.summary.clone());
    ArtifactReporter::new(outdir).with_summary_path(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_gen_args() -> GeneratorArgs {
        GeneratorArgs {
            months: None,
            seed: None,
        }
    }

    fn no_analysis_args() -> AnalysisArgs {
        AnalysisArgs {
            window: None,
            horizon: None,
            outdir: None,
            summary: None,
        }
    }

    #[test]
    fn default_toml_builds_default_model() {
        let model = build_loss_model(&GeneratorToml::default()).unwrap();
        assert_eq!(model, LossModel::default());
    }

    #[test]
    fn model_overrides_apply() {
        let mut generator = GeneratorToml::default();
        generator.model.noise_sd = Some(0.0);
        generator.model.slope = Some(500.0);
        generator.start_year = 2020;
        generator.start_month = 7;
        let model = build_loss_model(&generator).unwrap();
        assert_eq!(model.noise_sd(), 0.0);
        assert_eq!(model.slope(), 500.0);
        assert_eq!(model.intercept(), 100_000.0);
        assert_eq!(model.start().to_string(), "2020-07-01");
    }

    #[test]
    fn bad_start_month_rejected() {
        let generator = GeneratorToml {
            start_month: 13,
            ..GeneratorToml::default()
        };
        assert!(build_loss_model(&generator).is_err());
    }

    #[test]
    fn extreme_start_year_rejected() {
        let generator = GeneratorToml {
            start_year: i32::MAX,
            ..GeneratorToml::default()
        };
        let err = build_loss_model(&generator).unwrap_err();
        assert!(format!("{err:#}").contains("invalid year: 2147483647"), "{err:#}");
    }

    #[test]
    fn cli_flags_override_file() {
        let args = GeneratorArgs {
            months: Some(24),
            seed: None,
        };
        let cfg = build_generation_config(&GeneratorToml::default(), &args).unwrap();
        assert_eq!(cfg.months(), 24);
        assert_eq!(cfg.seed(), 7);

        let cfg = build_generation_config(&GeneratorToml::default(), &no_gen_args()).unwrap();
        assert_eq!(cfg.months(), 72);

        let analysis = build_analysis_config(
            &AnalysisToml::default(),
            &AnalysisArgs {
                window: Some(3),
                ..no_analysis_args()
            },
        );
        assert_eq!(analysis.window(), 3);
        assert_eq!(analysis.horizon(), 6);
    }

    #[test]
    fn reporter_uses_cli_outdir() {
        let args = AnalysisArgs {
            outdir: Some(PathBuf::from("elsewhere")),
            ..no_analysis_args()
        };
        let reporter = build_reporter(&IoToml::default(), &args);
        assert_eq!(reporter.out_dir(), std::path::Path::new("elsewhere"));
        assert!(reporter.written().is_empty());
    }
}
