use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Synthetic monthly insurance losses with baseline time-series analysis.
#[derive(Parser)]
#[command(
    name = "claimcast",
    version,
    about = "Synthetic monthly insurance losses and baseline analysis"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a synthetic loss series and write it as CSV.
    Generate(GenerateArgs),
    /// Analyze a loss series CSV and write the artifacts.
    Analyze(AnalyzeArgs),
    /// Generate and analyze in one pass.
    Run(RunArgs),
}

/// Generator overrides shared by `generate` and `run`.
#[derive(clap::Args)]
pub struct GeneratorArgs {
    /// Number of months to generate.
    #[arg(long)]
    pub months: Option<usize>,

    /// RNG seed.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Analysis overrides shared by `analyze` and `run`.
#[derive(clap::Args)]
pub struct AnalysisArgs {
    /// Rolling window in months.
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Forecast horizon in months.
    #[arg(long)]
    pub horizon: Option<usize>,

    /// Directory for CSV artifacts.
    #[arg(long)]
    pub outdir: Option<PathBuf>,

    /// Path for the summary JSON.
    #[arg(long)]
    pub summary: Option<PathBuf>,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file (default: ./claimcast.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub generator: GeneratorArgs,

    /// Output CSV path.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `analyze` subcommand.
#[derive(clap::Args)]
pub struct AnalyzeArgs {
    /// Path to TOML configuration file (default: ./claimcast.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Input loss series CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file (default: ./claimcast.toml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub generator: GeneratorArgs,

    #[command(flatten)]
    pub analysis: AnalysisArgs,
}
