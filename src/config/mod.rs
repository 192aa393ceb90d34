//! Configuration management for molecular analysis
//!
//! Nothing here is required: without a configuration file the report lands
//! in the working directory as `<stem>_molecular_analysis.out` and logging
//! runs at INFO level.

mod args;

pub use args::Args;

use color_eyre::eyre::{eyre, Result, WrapErr};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_OUTPUT_SUFFIX: &str = "_molecular_analysis.out";

/// Main configuration structure
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Config {
    pub log_level: Option<String>,
    pub output: Option<OutputParams>,
}

/// Report destination parameters
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct OutputParams {
    pub directory: Option<PathBuf>,
    pub suffix: Option<String>,
}

impl Default for OutputParams {
    fn default() -> Self {
        OutputParams {
            directory: None,
            suffix: Some(DEFAULT_OUTPUT_SUFFIX.to_string()),
        }
    }
}

impl OutputParams {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        let defaults = Self::default();
        if self.directory.is_none() {
            self.directory = defaults.directory;
        }
        if self.suffix.is_none() {
            self.suffix = defaults.suffix;
        }
        self
    }
}

impl Config {
    /// Apply default values to all nested parameter sets
    pub fn with_defaults(mut self) -> Self {
        if self.log_level.is_none() {
            self.log_level = Some("info".to_string());
        }
        self.output = Some(self.output.unwrap_or_default().with_defaults());
        self
    }

    /// Load a YAML configuration file, or the defaults when no file is given.
    pub fn load(path: Option<&String>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Config::default().with_defaults());
        };

        let content = fs::read_to_string(path)
            .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config = serde_yml::from_str::<Config>(content)
            .wrap_err("Failed to parse configuration file")?
            .with_defaults();
        config.log_level()?;
        Ok(config)
    }

    pub fn log_level(&self) -> Result<Level> {
        let level = self.log_level.as_deref().unwrap_or("info");
        Level::from_str(level).map_err(|_| eyre!("Invalid log level: {}", level))
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output.as_ref().and_then(|o| o.directory.as_deref())
    }

    pub fn output_suffix(&self) -> &str {
        self.output
            .as_ref()
            .and_then(|o| o.suffix.as_deref())
            .unwrap_or(DEFAULT_OUTPUT_SUFFIX)
    }
}

/// File name of `input` without its final extension.
pub fn molecule_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Report path for `input`: `<directory>/<stem><suffix>`.
///
/// `output_dir` takes precedence over the configured directory. With neither
/// set the bare file name is returned, relative to the working directory.
pub fn output_path(input: &Path, output_dir: Option<&Path>, config: &Config) -> PathBuf {
    let file_name = format!("{}{}", molecule_name(input), config.output_suffix());
    match output_dir.or(config.output_dir()) {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.log_level().unwrap(), Level::INFO);
        assert_eq!(config.output_suffix(), DEFAULT_OUTPUT_SUFFIX);
        assert!(config.output_dir().is_none());
    }

    #[test]
    fn test_partial_yaml_is_filled_with_defaults() {
        let config = Config::from_yaml("output:\n  directory: results\n").unwrap();
        assert_eq!(config.output_dir(), Some(Path::new("results")));
        assert_eq!(config.output_suffix(), DEFAULT_OUTPUT_SUFFIX);
        assert_eq!(config.log_level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_full_yaml() {
        let yaml = "log_level: DEBUG\noutput:\n  directory: out\n  suffix: .report\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
        assert_eq!(
            output_path(Path::new("data/benzene.xyz"), None, &config),
            PathBuf::from("out/benzene.report")
        );
    }

    #[test]
    fn test_invalid_log_level() {
        assert!(Config::from_yaml("log_level: loud\n").is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let path = "/nonexistent/molecular_analysis.yaml".to_string();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_molecule_name() {
        assert_eq!(molecule_name(Path::new("water.xyz")), "water");
        assert_eq!(molecule_name(Path::new("/tmp/inputs/a.b.xyz")), "a.b");
        assert_eq!(molecule_name(Path::new("methane")), "methane");
        assert_eq!(molecule_name(Path::new(".hidden")), ".hidden");
    }

    #[test]
    fn test_default_output_path_is_in_working_directory() {
        let config = Config::default().with_defaults();
        assert_eq!(
            output_path(Path::new("/data/sets/water.xyz"), None, &config),
            PathBuf::from("water_molecular_analysis.out")
        );
    }

    #[test]
    fn test_cli_output_dir_overrides_config() {
        let config = Config::from_yaml("output:\n  directory: from_config\n").unwrap();
        assert_eq!(
            output_path(Path::new("water.xyz"), Some(Path::new("from_cli")), &config),
            PathBuf::from("from_cli/water_molecular_analysis.out")
        );
    }
}
