//! Input/Output operations for molecular analysis
//!
//! This module handles XYZ parsing, logging setup, and report writing.

mod output;
mod xyz;

pub use output::{setup_output, write_report, write_report_file, Report};
pub use xyz::{parse_xyz, read_xyz};
