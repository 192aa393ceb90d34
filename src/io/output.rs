//! Output formatting and logging utilities

use crate::properties::{AnalysisResult, Linearity};
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::SystemTime as StdSystemTime;
use tracing::{info, Level};
use tracing_subscriber::{
    filter::LevelFilter, fmt::format::Writer, fmt::layer, fmt::time::FormatTime,
    layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

/// Custom time formatter that shows only seconds
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = StdSystemTime::now();
        let duration = now
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default();

        // Format as HH:MM:SS (only seconds precision)
        let total_seconds = duration.as_secs();
        let hours = (total_seconds / 3600) % 24;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;

        write!(w, "{:02}:{:02}:{:02}", hours, minutes, seconds)
    }
}

/// Setup logging to a file or stdout at the given level.
pub fn setup_output(log_path: Option<&String>, level: Level) {
    let filter = LevelFilter::from_level(level);

    if let Some(path) = log_path {
        match File::create(path) {
            Ok(log) => {
                let file_layer = layer()
                    .with_writer(log)
                    .with_timer(SecondPrecisionTimer)
                    .with_ansi(false)
                    .with_filter(filter);
                if Registry::default().with(file_layer).try_init().is_err() {
                    eprintln!("Logging was already initialised, ignoring log file: {}", path);
                }
                return;
            }
            Err(err) => eprintln!("Could not create log file {}: {}", path, err),
        }
    }

    let stdout_layer = layer()
        .with_writer(io::stdout)
        .with_timer(SecondPrecisionTimer)
        .with_ansi(true)
        .with_filter(filter);
    if Registry::default().with(stdout_layer).try_init().is_err() {
        eprintln!("Logging was already initialised");
    }
}

const BANNER: [&str; 10] = [
    r" __  __       _                 _            ",
    r"|  \/  | ___ | | ___  ___ _   _| | __ _ _ __ ",
    r"| |\/| |/ _ \| |/ _ \/ __| | | | |/ _` | '__|",
    r"| |  | | (_) | |  __/ (__| |_| | | (_| | |   ",
    r"|_| _|_|\___/|_|\___|\___|\__,_|_|\__,_|_|   ",
    r"   / \   _ __   __ _| |_   _ ___(_)___       ",
    r"  / _ \ | '_ \ / _` | | | | / __| / __|      ",
    r" / ___ \| | | | (_| | | |_| \__ \ \__ \      ",
    r"/_/   \_\_| |_|\__,_|_|\__, |___/_|___/      ",
    r"                       |___/                   ",
];

const CREDITS: [&str; 3] = [
    "Molecular Analysis Data",
    "Developed by Alyx Mitkov",
    "Version 0.1",
];

const DESCRIPTION: &str = "This molecular analysis reveals essential characteristics of the \
analyzed structure. The script extracts information from an XYZ file, including the number of \
atoms, atomic symbols, and coordinates. Utilizing predefined atomic charges, it calculates the \
total number of unpaired electrons, determining the multiplicity of the molecular system. The \
script further computes the total number of electrons and the resulting molecular charge. These \
findings are presented in this output file, offering insights into the molecular properties. \
The program also outputs the vibrational degrees of freedom calculated on the basis of the \
molecular linearity given as a terminal argument and the number of atoms.";

/// Values rendered into the analysis report.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    pub molecule_name: &'a str,
    pub atom_count: usize,
    pub linearity: Linearity,
    pub result: &'a AnalysisResult,
}

/// Write the fixed-layout analysis report to a writer
pub fn write_report<W: Write>(writer: &mut W, report: &Report<'_>) -> io::Result<()> {
    for line in BANNER {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer)?;

    for line in CREDITS {
        writeln!(writer, "{}", line)?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", DESCRIPTION)?;
    writeln!(writer)?;

    writeln!(writer, "Molecule Name: {}", report.molecule_name)?;
    writeln!(writer, "Total Number of Atoms: {}", report.atom_count)?;
    writeln!(writer, "Molecule Type: {}", report.linearity)?;
    writeln!(writer)?;

    writeln!(writer, "Total Molecular Charge: {}", report.result.total_charge)?;
    writeln!(writer, "Total Electrons: {}", report.result.total_electrons)?;
    writeln!(writer, "Multiplicity: {}", report.result.multiplicity)?;
    writeln!(writer)?;

    writeln!(
        writer,
        "Vibrational Degrees of Freedom: {}",
        report.result.vibrational_dof
    )?;

    Ok(())
}

/// Create (or truncate) `path` and write the report into it.
pub fn write_report_file<P: AsRef<Path>>(path: P, report: &Report<'_>) -> io::Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    write_report(&mut writer, report)?;
    writer.flush()?;

    info!("Output written to {}", path.display());
    Ok(())
}
