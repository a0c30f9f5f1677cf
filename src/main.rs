mod analyze_cmd;
mod cli;
mod config;
mod convert;
mod generate_cmd;
mod logging;
mod run_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use claimcast_io::IoError;
use claimcast_pipeline::{ErrorKind, PipelineError};

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        match error_kind(&e) {
            Some(kind) => eprintln!("Error [{kind:?}]: {e:#}"),
            None => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate_cmd::run(args),
        Command::Analyze(args) => analyze_cmd::run(args),
        Command::Run(args) => run_cmd::run(args),
    }
}

/// Finds the classified library error anywhere in the context chain.
fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.chain().find_map(|cause| {
        cause
            .downcast_ref::<PipelineError>()
            .map(PipelineError::kind)
            .or_else(|| cause.downcast_ref::<IoError>().map(IoError::kind))
    })
}
