//! XYZ geometry reader
//!
//! Line 1 holds the declared atom count, line 2 is a free-form comment and
//! every following line is `<symbol> <x> <y> <z> [extra tokens]`. Lines with
//! fewer than four tokens are logged and skipped; a coordinate that does not
//! parse as a float aborts the whole read.

use crate::error::XyzError;
use crate::geometry::Geometry;
use nalgebra::Vector3;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::warn;

/// Open `path` and parse it as an XYZ file.
pub fn read_xyz<P: AsRef<Path>>(path: P) -> Result<Geometry, XyzError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| XyzError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_xyz(BufReader::new(file))
}

/// Parse XYZ text from any buffered reader.
pub fn parse_xyz<R: BufRead>(reader: R) -> Result<Geometry, XyzError> {
    let mut lines = reader.lines();

    let header = lines.next().ok_or(XyzError::MissingHeader)??;
    let declared = header.trim();
    let declared_atoms = declared
        .parse::<usize>()
        .map_err(|source| XyzError::InvalidAtomCount {
            value: declared.to_string(),
            source,
        })?;

    // Comment line; its content is irrelevant but a read error is not.
    if let Some(comment) = lines.next() {
        comment?;
    }

    let mut geometry = Geometry::with_capacity(declared_atoms, declared_atoms.min(4096));

    for (idx, line) in lines.enumerate() {
        let line = line?;
        let line_no = idx + 3;
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() < 4 {
            warn!("Ignoring invalid line {}: {:?}", line_no, line);
            continue;
        }

        let coord = parse_coordinates(&tokens[1..4], line_no)?;
        geometry.push_atom(tokens[0], coord);
    }

    Ok(geometry)
}

fn parse_coordinates(tokens: &[&str], line_no: usize) -> Result<Vector3<f64>, XyzError> {
    let mut xyz = [0.0f64; 3];
    for (slot, token) in xyz.iter_mut().zip(tokens) {
        *slot = token
            .parse::<f64>()
            .map_err(|source| XyzError::InvalidCoordinate {
                line: line_no,
                value: token.to_string(),
                source,
            })?;
    }
    Ok(Vector3::from(xyz))
}
