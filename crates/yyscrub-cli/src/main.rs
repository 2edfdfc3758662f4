//! Command-line interface for yyscrub.
//!
//! Usage:
//!   yyscrub -c `<input>` `<output>`   - Empty semantic action blocks
//!   yyscrub -p `<input>` `<output>`   - Purify a grammar for diffing
mod cli;
mod files;
mod logging;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "run failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mode = cli.mode();
    let source = files::read_source(&cli.input)?;
    tracing::info!(
        mode = mode.flag(),
        input = %cli.input.display(),
        bytes = source.len(),
        "loaded grammar"
    );

    let summary = files::write_scrubbed(&cli.output, mode, &source, cli.options())
        .with_context(|| format!("while processing {}", cli.input.display()))?;
    tracing::debug!(?summary, "scan finished");
    if summary.final_depth != 0 {
        tracing::warn!(
            depth = summary.final_depth,
            "braces did not balance; output may be truncated"
        );
    }

    println!("{} -> {}", cli.input.display(), cli.output.display());
    Ok(())
}
