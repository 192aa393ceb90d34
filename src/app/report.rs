use crate::elements::ElementTable;
use crate::geometry::Geometry;
use crate::properties::{AnalysisResult, Linearity};
use tracing::{debug, info, warn};

pub fn log_geometry(geometry: &Geometry, table: &ElementTable) {
    info!(
        "Parsed {} atoms ({} declared)",
        geometry.len(),
        geometry.declared_atoms
    );
    if geometry.len() != geometry.declared_atoms {
        warn!(
            "Declared atom count {} differs from the {} atoms parsed; the declared count is used for the vibrational analysis",
            geometry.declared_atoms,
            geometry.len()
        );
    }

    for (idx, (symbol, coord)) in geometry.atoms().enumerate() {
        debug!(
            "  Atom {}: {} at [{:.6}, {:.6}, {:.6}]",
            idx + 1,
            symbol,
            coord.x,
            coord.y,
            coord.z
        );
        if !table.contains(symbol) {
            debug!("  Element '{}' is not in the element table, counted as 0", symbol);
        }
    }
}

pub fn report_analysis_summary(
    molecule_name: &str,
    geometry: &Geometry,
    linearity: Linearity,
    result: &AnalysisResult,
) {
    info!("\nMolecular analysis finished for {}.", molecule_name);
    info!("  Atoms (declared):               {}", geometry.declared_atoms);
    info!("  Molecule type:                  {}", linearity);
    info!("  Total molecular charge:         {}", result.total_charge);
    info!("  Total electrons:                {}", result.total_electrons);
    info!("  Multiplicity:                   {}", result.multiplicity);
    info!("  Vibrational degrees of freedom: {}", result.vibrational_dof);
}
