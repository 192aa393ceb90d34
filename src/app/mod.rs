mod report;

use self::report::{log_geometry, report_analysis_summary};
use crate::config::{self, Args, Config};
use crate::elements::ElementTable;
use crate::io::{read_xyz, setup_output, write_report_file, Report};
use crate::properties::{analyze, Linearity};
use color_eyre::eyre::{Result, WrapErr};
use std::path::PathBuf;
use tracing::{error, info, warn};

/// How a run ended, mapped onto the process exit status by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    Failed,
}

pub struct AnalysisApplication {
    args: Args,
    config: Config,
}

impl AnalysisApplication {
    pub fn new(args: Args) -> Result<Self> {
        let config = Config::load(args.config_file.as_ref())?;
        Ok(Self { args, config })
    }

    /// Load, analyse and report. Loader and calculator failures are logged
    /// and end the run; a report that cannot be written is only logged.
    pub fn run(self) -> Result<Outcome> {
        setup_output(self.args.log.as_ref(), self.config.log_level()?);

        let linearity = resolve_linearity(&self.args.molecule_type);
        let table = ElementTable::standard();

        info!("Reading geometry from: {}", self.args.input.display());
        let geometry = match read_xyz(&self.args.input) {
            Ok(geometry) => geometry,
            Err(err) => {
                error!("An error occurred while reading the XYZ file: {}", err);
                return Ok(Outcome::Failed);
            }
        };
        log_geometry(&geometry, table);

        let result = match analyze(&geometry, linearity, table) {
            Ok(result) => result,
            Err(err) => {
                error!("An error occurred while analysing the molecule: {}", err);
                return Ok(Outcome::Failed);
            }
        };

        let molecule_name = config::molecule_name(&self.args.input);
        report_analysis_summary(&molecule_name, &geometry, linearity, &result);

        let report = Report {
            molecule_name: &molecule_name,
            atom_count: geometry.declared_atoms,
            linearity,
            result: &result,
        };
        let path = self.output_path();
        if let Err(err) = write_report_file(&path, &report)
            .wrap_err_with(|| format!("Unable to write report to {}", path.display()))
        {
            error!("An error occurred while writing to the output file: {:#}", err);
        }

        Ok(Outcome::Completed)
    }

    fn output_path(&self) -> PathBuf {
        config::output_path(
            &self.args.input,
            self.args.output_dir.as_deref(),
            &self.config,
        )
    }
}

fn resolve_linearity(molecule_type: &str) -> Linearity {
    let linearity = Linearity::from_arg(molecule_type);
    let lowered = molecule_type.to_lowercase();
    if lowered != "linear" && lowered != "nonlinear" {
        warn!(
            "Unrecognised molecule type '{}', treating it as non-linear",
            molecule_type
        );
    }
    linearity
}
