//! Static element table
//!
//! Maps element symbols to the integer used as the per-atom electron count.
//! The value is the atomic number of the neutral atom. Lookups are
//! case-sensitive ("He" is helium, "HE" is unknown) and unknown symbols
//! count as zero rather than failing.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Number of elements known to the table.
pub const NUM_ELEMENTS: usize = 118;

/// Element symbols paired with their electron count, ordered by atomic number.
#[rustfmt::skip]
pub const ELEMENT_ELECTRONS: [(&str, u32); NUM_ELEMENTS] = [
    ("H", 1), ("He", 2), ("Li", 3), ("Be", 4), ("B", 5),
    ("C", 6), ("N", 7), ("O", 8), ("F", 9), ("Ne", 10),
    ("Na", 11), ("Mg", 12), ("Al", 13), ("Si", 14), ("P", 15),
    ("S", 16), ("Cl", 17), ("Ar", 18), ("K", 19), ("Ca", 20),
    ("Sc", 21), ("Ti", 22), ("V", 23), ("Cr", 24), ("Mn", 25),
    ("Fe", 26), ("Co", 27), ("Ni", 28), ("Cu", 29), ("Zn", 30),
    ("Ga", 31), ("Ge", 32), ("As", 33), ("Se", 34), ("Br", 35),
    ("Kr", 36), ("Rb", 37), ("Sr", 38), ("Y", 39), ("Zr", 40),
    ("Nb", 41), ("Mo", 42), ("Tc", 43), ("Ru", 44), ("Rh", 45),
    ("Pd", 46), ("Ag", 47), ("Cd", 48), ("In", 49), ("Sn", 50),
    ("Sb", 51), ("Te", 52), ("I", 53), ("Xe", 54), ("Cs", 55),
    ("Ba", 56), ("La", 57), ("Ce", 58), ("Pr", 59), ("Nd", 60),
    ("Pm", 61), ("Sm", 62), ("Eu", 63), ("Gd", 64), ("Tb", 65),
    ("Dy", 66), ("Ho", 67), ("Er", 68), ("Tm", 69), ("Yb", 70),
    ("Lu", 71), ("Hf", 72), ("Ta", 73), ("W", 74), ("Re", 75),
    ("Os", 76), ("Ir", 77), ("Pt", 78), ("Au", 79), ("Hg", 80),
    ("Tl", 81), ("Pb", 82), ("Bi", 83), ("Po", 84), ("At", 85),
    ("Rn", 86), ("Fr", 87), ("Ra", 88), ("Ac", 89), ("Th", 90),
    ("Pa", 91), ("U", 92), ("Np", 93), ("Pu", 94), ("Am", 95),
    ("Cm", 96), ("Bk", 97), ("Cf", 98), ("Es", 99), ("Fm", 100),
    ("Md", 101), ("No", 102), ("Lr", 103), ("Rf", 104), ("Db", 105),
    ("Sg", 106), ("Bh", 107), ("Hs", 108), ("Mt", 109), ("Ds", 110),
    ("Rg", 111), ("Cn", 112), ("Nh", 113), ("Fl", 114), ("Mc", 115),
    ("Lv", 116), ("Ts", 117), ("Og", 118),
];

/// Read-only symbol lookup built from [`ELEMENT_ELECTRONS`].
#[derive(Debug, Clone)]
pub struct ElementTable {
    electrons: HashMap<&'static str, u32>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self {
            electrons: ELEMENT_ELECTRONS.iter().copied().collect(),
        }
    }

    /// Process-wide table, built on first use.
    pub fn standard() -> &'static ElementTable {
        static TABLE: OnceLock<ElementTable> = OnceLock::new();
        TABLE.get_or_init(ElementTable::new)
    }

    pub fn get(&self, symbol: &str) -> Option<u32> {
        self.electrons.get(symbol).copied()
    }

    /// Electron count for `symbol`, or 0 if the symbol is not in the table.
    pub fn lookup(&self, symbol: &str) -> u32 {
        self.get(symbol).unwrap_or(0)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.electrons.contains_key(symbol)
    }

    pub fn len(&self) -> usize {
        self.electrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_covers_all_elements() {
        let table = ElementTable::standard();
        assert_eq!(table.len(), NUM_ELEMENTS);
        assert_eq!(table.lookup("H"), 1);
        assert_eq!(table.lookup("Og"), 118);
    }

    #[test]
    fn test_values_follow_atomic_number_order() {
        for (idx, (symbol, electrons)) in ELEMENT_ELECTRONS.iter().enumerate() {
            assert_eq!(*electrons as usize, idx + 1, "unexpected value for {}", symbol);
        }
        let unique: HashSet<&str> = ELEMENT_ELECTRONS.iter().map(|(s, _)| *s).collect();
        assert_eq!(unique.len(), NUM_ELEMENTS);
    }

    #[test]
    fn test_common_elements() {
        let table = ElementTable::new();
        assert_eq!(table.lookup("C"), 6);
        assert_eq!(table.lookup("N"), 7);
        assert_eq!(table.lookup("Cl"), 17);
        assert_eq!(table.lookup("Fe"), 26);
        assert_eq!(table.lookup("Rn"), 86);
    }

    #[test]
    fn test_unknown_symbol_defaults_to_zero() {
        let table = ElementTable::standard();
        assert_eq!(table.get("Xx"), None);
        assert_eq!(table.lookup("Xx"), 0);
        assert!(!table.contains(""));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let table = ElementTable::standard();
        assert_eq!(table.lookup("He"), 2);
        assert_eq!(table.lookup("HE"), 0);
        assert_eq!(table.lookup("he"), 0);
        assert!(!table.contains("h"));
    }
}
