//! Generate command: synthesize a loss series and write it as CSV.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use claimcast_io::write_series_csv;
use claimcast_pipeline::PipelineError;
use claimcast_synth::generate;

use crate::cli::GenerateArgs;
use crate::config::ClaimcastConfig;
use crate::convert;

/// Run the generator and write `[io].data` (or `--out`).
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();
    let config = ClaimcastConfig::load(args.config.as_deref())?;

    let generation = convert::build_generation_config(&config.generator, &args.generator)?;
    info!(
        months = generation.months(),
        seed = generation.seed(),
        start = %generation.model().start(),
        "generating loss series"
    );
    let series = generate(generation.model(), generation.months(), generation.seed())
        .map_err(PipelineError::from)
        .context("generation failed")?;

    let out = args.out.unwrap_or(config.io.data);
    write_series_csv(&out, &series)
        .with_context(|| format!("failed to write series CSV: {}", out.display()))?;
    Ok(())
}
