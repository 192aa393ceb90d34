//! Scalar molecular properties derived from element symbols
//!
//! Every quantity here comes from table lookups and integer arithmetic:
//!
//! - electron count: sum of the table value of every symbol
//! - molecular charge: the same sum (no separate ionic charge model)
//! - multiplicity: 1 when the unpaired-electron count is even, 2 when odd
//! - vibrational degrees of freedom: 3N - 5 (linear) or 3N - 6 (non-linear)
//!
//! The degrees of freedom are not clamped, so one- and two-atom molecules
//! can come out negative. Arithmetic overflow is reported as a
//! [`PropertyError`] instead of wrapping.


use crate::elements::ElementTable;
use crate::error::PropertyError;
use crate::geometry::Geometry;
use std::fmt;
use tracing::debug;

/// Whether the molecule is linear, as stated on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Linearity {
    Linear,
    NonLinear,
}

impl Linearity {
    /// `linear` in any letter case is linear; anything else is non-linear.
    pub fn from_arg(arg: &str) -> Self {
        if arg.to_lowercase() == "linear" {
            Linearity::Linear
        } else {
            Linearity::NonLinear
        }
    }

    pub fn is_linear(self) -> bool {
        matches!(self, Linearity::Linear)
    }
}

impl fmt::Display for Linearity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Linearity::Linear => write!(f, "Linear"),
            Linearity::NonLinear => write!(f, "Non-linear"),
        }
    }
}

/// Two-state spin multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    Singlet = 1,
    Doublet = 2,
}

impl Multiplicity {
    pub fn value(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Multiplicity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Everything the report needs besides the molecule name and linearity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisResult {
    pub total_electrons: i64,
    pub total_charge: i64,
    pub multiplicity: Multiplicity,
    pub vibrational_dof: i64,
}

fn sum_table_values<S: AsRef<str>>(
    symbols: &[S],
    table: &ElementTable,
    quantity: &'static str,
) -> Result<i64, PropertyError> {
    symbols.iter().try_fold(0i64, |acc, symbol| {
        acc.checked_add(i64::from(table.lookup(symbol.as_ref())))
            .ok_or_else(|| PropertyError::overflow(quantity))
    })
}

/// Unpaired-electron count used for the multiplicity parity rule.
pub fn unpaired_electrons<S: AsRef<str>>(
    symbols: &[S],
    table: &ElementTable,
) -> Result<i64, PropertyError> {
    sum_table_values(symbols, table, "unpaired electron count")
}

pub fn total_electrons<S: AsRef<str>>(
    symbols: &[S],
    table: &ElementTable,
) -> Result<i64, PropertyError> {
    sum_table_values(symbols, table, "total electron count")
}

/// Molecular charge. Numerically identical to [`total_electrons`].
pub fn total_charge<S: AsRef<str>>(
    symbols: &[S],
    table: &ElementTable,
) -> Result<i64, PropertyError> {
    sum_table_values(symbols, table, "total molecular charge")
}

pub fn multiplicity(unpaired_electrons: i64) -> Multiplicity {
    if unpaired_electrons.rem_euclid(2) == 0 {
        Multiplicity::Singlet
    } else {
        Multiplicity::Doublet
    }
}

pub fn vibrational_dof(atom_count: usize, linearity: Linearity) -> Result<i64, PropertyError> {
    const QUANTITY: &str = "vibrational degrees of freedom";

    let removed = match linearity {
        Linearity::Linear => 5,
        Linearity::NonLinear => 6,
    };

    i64::try_from(atom_count)
        .ok()
        .and_then(|n| n.checked_mul(3))
        .map(|modes| modes - removed)
        .ok_or_else(|| PropertyError::overflow(QUANTITY))
}

/// Run every calculator over a loaded geometry.
///
/// Degrees of freedom use the declared atom count from the file header,
/// not the number of atoms that were actually parsed.
pub fn analyze(
    geometry: &Geometry,
    linearity: Linearity,
    table: &ElementTable,
) -> Result<AnalysisResult, PropertyError> {
    let symbols = geometry.symbols();

    let unpaired = unpaired_electrons(symbols, table)?;
    let multiplicity = multiplicity(unpaired);
    let total_electrons = total_electrons(symbols, table)?;
    let total_charge = total_charge(symbols, table)?;
    let vibrational_dof = vibrational_dof(geometry.declared_atoms, linearity)?;

    debug!(
        "Unpaired electrons: {}, electrons: {}, charge: {}",
        unpaired, total_electrons, total_charge
    );

    Ok(AnalysisResult {
        total_electrons,
        total_charge,
        multiplicity,
        vibrational_dof,
    })
}
