//! Command-line argument parsing for molecular analysis

use clap::Parser;
use std::path::PathBuf;

/// Electron count, multiplicity and vibrational analysis of an XYZ geometry
#[derive(Parser, Debug)]
#[command(name = "molecular_analysis")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the XYZ geometry file
    pub input: PathBuf,

    /// Molecule type (linear or nonlinear)
    pub molecule_type: String,

    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Directory for the report (overrides config file)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log file path (default stdout)
    #[arg(short, long)]
    pub log: Option<String>,
}
