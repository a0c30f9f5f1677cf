//! Run command: generate and analyze in one process.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use claimcast_pipeline::run_pipeline;

use crate::cli::RunArgs;
use crate::config::ClaimcastConfig;
use crate::convert;

/// Run the full pipeline, writing every artifact.
pub fn run(args: RunArgs) -> Result<()> {
    let _cmd = info_span!("run").entered();
    let config = ClaimcastConfig::load(args.config.as_deref())?;

    let generation = convert::build_generation_config(&config.generator, &args.generator)?;
    let analysis = convert::build_analysis_config(&config.analysis, &args.analysis);
    let mut reporter = convert::build_reporter(&config.io, &args.analysis);

    let output =
        run_pipeline(&generation, &analysis, &mut reporter).context("pipeline failed")?;

    for path in reporter.written() {
        info!(path = %path.display(), "wrote artifact");
    }
    info!(
        months = output.series().len(),
        level = output.forecast().level(),
        "pipeline complete"
    );
    Ok(())
}
