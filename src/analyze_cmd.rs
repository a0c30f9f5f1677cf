//! Analyze command: read a loss series CSV and write the analysis artifacts.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use claimcast_io::read_series_csv;
use claimcast_pipeline::analyze_series;

use crate::cli::AnalyzeArgs;
use crate::config::ClaimcastConfig;
use crate::convert;

/// Run smoothing, decomposition and forecasting over an existing series.
pub fn run(args: AnalyzeArgs) -> Result<()> {
    let _cmd = info_span!("analyze").entered();
    let config = ClaimcastConfig::load(args.config.as_deref())?;

    let input = args.csv.unwrap_or_else(|| config.io.data.clone());
    let reader_cfg = convert::build_reader_config(&config.io);
    info!(path = %input.display(), "reading loss series");
    let series = read_series_csv(&input, &reader_cfg)
        .with_context(|| format!("failed to read series CSV: {}", input.display()))?;
    info!(
        months = series.len(),
        first = %series.first_date(),
        last = %series.last_date(),
        "loss series loaded"
    );

    let analysis = convert::build_analysis_config(&config.analysis, &args.analysis);
    let mut reporter = convert::build_reporter(&config.io, &args.analysis);
    let output =
        analyze_series(series, &analysis, &mut reporter).context("analysis failed")?;

    let summary = output.summary();
    info!(
        window = summary.window_months,
        level = summary.last_smoothed_level,
        horizon = summary.forecast_horizon_months,
        n_artifacts = reporter.written().len(),
        "analysis complete"
    );
    Ok(())
}
