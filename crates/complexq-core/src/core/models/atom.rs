use nalgebra::Point3;

const ALPHA_CARBON_ATOM_NAME: &str = "CA";
const BETA_CARBON_ATOM_NAME: &str = "CB";
const GLYCINE_RESIDUE_NAME: &str = "GLY";

/// Represents one parsed fixed-column atom record from a predicted structure file.
///
/// This struct carries the fields of a single `ATOM` line that the scoring pipeline
/// consumes: chain membership, atom and residue identity, 3D coordinates, and the
/// per-atom confidence value stored in the B-factor column by structure-prediction
/// models. Records are immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The atom serial number.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "CB", "N").
    pub name: String,
    /// The three-letter residue name (e.g., "ALA", "GLY").
    pub res_name: String,
    /// The single-character chain identifier.
    pub chain_id: char,
    /// The residue sequence number from the source file.
    pub res_seq: isize,
    /// The insertion code, if present.
    pub insertion_code: Option<char>,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
    /// The occupancy value.
    pub occupancy: f64,
    /// The per-atom confidence value carried in the B-factor column.
    pub confidence: f64,
}

impl AtomRecord {
    /// Returns `true` if this record is a Cα (alpha carbon) atom.
    ///
    /// Cα atoms define the backbone trace that the externally supplied per-residue
    /// confidence array is aligned against.
    pub fn is_alpha_carbon(&self) -> bool {
        self.name == ALPHA_CARBON_ATOM_NAME
    }

    /// Returns `true` if this record is the residue's interface-geometry representative.
    ///
    /// The representative is the Cβ atom, or the Cα atom for glycine (which has no Cβ).
    /// Inter-chain contact detection operates exclusively on representative atoms.
    pub fn is_interface_representative(&self) -> bool {
        self.name == BETA_CARBON_ATOM_NAME
            || (self.name == ALPHA_CARBON_ATOM_NAME && self.res_name == GLYCINE_RESIDUE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, res_name: &str) -> AtomRecord {
        AtomRecord {
            serial: 1,
            name: name.to_string(),
            res_name: res_name.to_string(),
            chain_id: 'A',
            res_seq: 1,
            insertion_code: None,
            position: Point3::new(0.0, 0.0, 0.0),
            occupancy: 1.0,
            confidence: 90.0,
        }
    }

    #[test]
    fn alpha_carbon_is_recognized() {
        assert!(record("CA", "ALA").is_alpha_carbon());
        assert!(!record("CB", "ALA").is_alpha_carbon());
        assert!(!record("N", "ALA").is_alpha_carbon());
    }

    #[test]
    fn beta_carbon_is_the_interface_representative() {
        assert!(record("CB", "ALA").is_interface_representative());
        assert!(record("CB", "LEU").is_interface_representative());
        assert!(!record("CA", "ALA").is_interface_representative());
        assert!(!record("N", "ALA").is_interface_representative());
    }

    #[test]
    fn glycine_falls_back_to_its_alpha_carbon() {
        assert!(record("CA", "GLY").is_interface_representative());
        assert!(!record("CB", "GLY").is_alpha_carbon());
        assert!(!record("O", "GLY").is_interface_representative());
    }
}
