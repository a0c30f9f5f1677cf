//! Pipeline orchestration.

use claimcast_analysis::{
    Forecast, RollingSeries, SeasonalIndex, baseline_forecast, rolling_mean, seasonal_index,
};
use claimcast_series::MonthlySeries;
use claimcast_synth::generate;
use tracing::{info, info_span};

use crate::config::{AnalysisConfig, GenerationConfig};
use crate::error::PipelineError;
use crate::report::{ReportError, Reporter};
use crate::summary::Summary;

/// Every artifact of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    series: MonthlySeries,
    rolling: RollingSeries,
    seasonal: SeasonalIndex,
    forecast: Forecast,
}

impl PipelineOutput {
    /// The analyzed series.
    pub fn series(&self) -> &MonthlySeries {
        &self.series
    }

    /// The rolling mean.
    pub fn rolling(&self) -> &RollingSeries {
        &self.rolling
    }

    /// The seasonal index.
    pub fn seasonal(&self) -> &SeasonalIndex {
        &self.seasonal
    }

    /// The baseline forecast.
    pub fn forecast(&self) -> &Forecast {
        &self.forecast
    }

    /// The summary record derived from this run.
    pub fn summary(&self) -> Summary {
        Summary {
            window_months: self.rolling.window(),
            last_smoothed_level: self.forecast.level(),
            forecast_horizon_months: self.forecast.horizon(),
        }
    }

    /// Hands every artifact to `reporter`, in pipeline order.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Report`] naming the first artifact the
    /// reporter rejected.
    pub fn emit(&self, reporter: &mut dyn Reporter) -> Result<(), PipelineError> {
        let wrap = |artifact: &'static str| {
            move |source: ReportError| PipelineError::Report { artifact, source }
        };

        reporter.series(&self.series).map_err(wrap("series"))?;
        reporter
            .rolling(&self.series, &self.rolling)
            .map_err(wrap("rolling"))?;
        reporter.seasonal(&self.seasonal).map_err(wrap("seasonal"))?;
        reporter
            .forecast(&self.series, &self.forecast)
            .map_err(wrap("forecast"))?;
        reporter.summary(&self.summary()).map_err(wrap("summary"))?;
        Ok(())
    }
}

/// Generates a series and analyzes it.
///
/// # Errors
///
/// Propagates the first generation or analysis error unchanged; see
/// [`analyze_series`].
pub fn run_pipeline(
    generation: &GenerationConfig,
    analysis: &AnalysisConfig,
    reporter: &mut dyn Reporter,
) -> Result<PipelineOutput, PipelineError> {
    let _span = info_span!("pipeline").entered();

    let series = generate(generation.model(), generation.months(), generation.seed())?;
    info!(
        months = series.len(),
        seed = generation.seed(),
        first = %series.first_date(),
        last = %series.last_date(),
        "generated loss series"
    );

    analyze_series(series, analysis, reporter)
}

/// Smooths, decomposes and forecasts an existing series, then reports.
///
/// All three stages complete before the reporter sees anything.
///
/// # Errors
///
/// - [`PipelineError::Analysis`] from any stage, unchanged.
/// - [`PipelineError::Report`] if the reporter fails.
pub fn analyze_series(
    series: MonthlySeries,
    analysis: &AnalysisConfig,
    reporter: &mut dyn Reporter,
) -> Result<PipelineOutput, PipelineError> {
    let rolling = rolling_mean(&series, analysis.window())?;
    info!(
        window = rolling.window(),
        n_defined = rolling.n_defined(),
        "smoothed series"
    );

    let seasonal = seasonal_index(&series)?;
    info!("computed seasonal index");

    let forecast = baseline_forecast(&rolling, analysis.horizon())?;
    info!(
        level = forecast.level(),
        horizon = forecast.horizon(),
        "built baseline forecast"
    );

    let output = PipelineOutput {
        series,
        rolling,
        seasonal,
        forecast,
    };
    output.emit(reporter)?;
    Ok(output)
}
