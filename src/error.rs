use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading an XYZ geometry.
#[derive(Debug, Error)]
pub enum XyzError {
    #[error("unable to open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("file is empty, expected the atom count on line 1")]
    MissingHeader,

    #[error("invalid atom count '{value}' on line 1: {source}")]
    InvalidAtomCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid coordinate '{value}' on line {line}: {source}")]
    InvalidCoordinate {
        line: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

/// Failures while deriving molecular properties.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PropertyError {
    #[error("{quantity} does not fit in a 64-bit integer")]
    Overflow { quantity: &'static str },
}

impl PropertyError {
    pub fn overflow(quantity: &'static str) -> Self {
        Self::Overflow { quantity }
    }
}
