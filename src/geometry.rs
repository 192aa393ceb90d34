use nalgebra::Vector3;

/// Molecular geometry read from an XYZ file.
///
/// `declared_atoms` is the count written on the first line of the file and
/// is not checked against the number of atoms actually parsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub declared_atoms: usize,
    symbols: Vec<String>,
    coords: Vec<Vector3<f64>>,
}

impl Geometry {
    pub fn new(declared_atoms: usize) -> Self {
        Self {
            declared_atoms,
            symbols: Vec::new(),
            coords: Vec::new(),
        }
    }

    pub fn with_capacity(declared_atoms: usize, capacity: usize) -> Self {
        Self {
            declared_atoms,
            symbols: Vec::with_capacity(capacity),
            coords: Vec::with_capacity(capacity),
        }
    }

    pub fn push_atom(&mut self, symbol: impl Into<String>, coord: Vector3<f64>) {
        self.symbols.push(symbol.into());
        self.coords.push(coord);
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn coords(&self) -> &[Vector3<f64>] {
        &self.coords
    }

    /// Number of atoms actually parsed.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn atoms(&self) -> impl Iterator<Item = (&str, &Vector3<f64>)> {
        self.symbols
            .iter()
            .map(String::as_str)
            .zip(self.coords.iter())
    }
}
