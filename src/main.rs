//! Molecular analysis command-line interface
//!
//! `molecular_analysis <input.xyz> <linear|nonlinear>` writes
//! `<input-stem>_molecular_analysis.out` to the working directory.

use clap::Parser;
use color_eyre::eyre::Result;
use molecular_analysis::app::{AnalysisApplication, Outcome};
use molecular_analysis::config::Args;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Usage errors exit with 1; --help and --version are not errors.
            let _ = err.print();
            return Ok(if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            });
        }
    };

    match AnalysisApplication::new(args)?.run()? {
        Outcome::Completed => Ok(ExitCode::SUCCESS),
        Outcome::Failed => Ok(ExitCode::FAILURE),
    }
}
