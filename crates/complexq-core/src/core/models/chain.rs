use super::atom::AtomRecord;
use nalgebra::Point3;

/// Represents one polymer chain of a predicted complex.
///
/// A chain stores the coordinates and B-column confidence of every atom in file
/// order, together with two chain-local index lists: the positions of Cα atoms
/// (used to align the complex-wide per-residue confidence array) and the positions
/// of interface-geometry representative atoms (Cβ, or Cα for glycine; used for
/// contact detection). All indices refer to this chain's own coordinate list.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// The single-character chain identifier (e.g., 'A', 'B').
    pub id: char,
    coords: Vec<Point3<f64>>,
    confidences: Vec<f64>,
    ca_indices: Vec<usize>,
    cb_indices: Vec<usize>,
}

impl Chain {
    /// The coordinates of every atom in the chain, in file order.
    pub fn coords(&self) -> &[Point3<f64>] {
        &self.coords
    }

    /// The per-atom confidence values, parallel to [`Chain::coords`].
    pub fn confidences(&self) -> &[f64] {
        &self.confidences
    }

    /// Chain-local indices at which Cα atoms occur.
    pub fn ca_indices(&self) -> &[usize] {
        &self.ca_indices
    }

    /// Chain-local indices at which interface-geometry representatives occur.
    pub fn cb_indices(&self) -> &[usize] {
        &self.cb_indices
    }

    /// The number of residues in the chain, counted by its Cα trace.
    pub fn residue_count(&self) -> usize {
        self.ca_indices.len()
    }

    /// Gathers the coordinates of the chain's interface-geometry representatives.
    pub fn cb_coords(&self) -> Vec<Point3<f64>> {
        self.cb_indices.iter().map(|&i| self.coords[i]).collect()
    }

    /// Gathers the B-column confidence of the chain's interface-geometry representatives.
    pub fn cb_confidences(&self) -> Vec<f64> {
        self.cb_indices.iter().map(|&i| self.confidences[i]).collect()
    }
}

/// Incrementally assembles one [`Chain`] from atom records.
///
/// The residue-index bookkeeping is derived from the length of this builder's own
/// coordinate vector, so every chain numbers its atoms independently from zero and
/// no counter can leak across chain boundaries.
struct ChainBuilder {
    id: char,
    coords: Vec<Point3<f64>>,
    confidences: Vec<f64>,
    ca_indices: Vec<usize>,
    cb_indices: Vec<usize>,
}

impl ChainBuilder {
    fn new(id: char) -> Self {
        Self {
            id,
            coords: Vec::new(),
            confidences: Vec::new(),
            ca_indices: Vec::new(),
            cb_indices: Vec::new(),
        }
    }

    fn add_record(&mut self, record: &AtomRecord) {
        let index = self.coords.len();
        if record.is_alpha_carbon() {
            self.ca_indices.push(index);
        }
        if record.is_interface_representative() {
            self.cb_indices.push(index);
        }
        self.coords.push(record.position);
        self.confidences.push(record.confidence);
    }

    fn build(self) -> Chain {
        Chain {
            id: self.id,
            coords: self.coords,
            confidences: self.confidences,
            ca_indices: self.ca_indices,
            cb_indices: self.cb_indices,
        }
    }
}

/// Represents the chain decomposition of one predicted complex structure.
///
/// Chains appear in first-seen order from the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    chains: Vec<Chain>,
}

impl Structure {
    /// The chains of the complex, in first-seen order.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    /// The number of chains in the complex.
    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    /// Finds a chain by its single-character identifier.
    pub fn find_chain_by_id(&self, id: char) -> Option<&Chain> {
        self.chains.iter().find(|c| c.id == id)
    }
}

/// Builds a [`Structure`] from a stream of atom records.
///
/// Records are routed to per-chain builders keyed by chain identifier; a chain
/// identifier that reappears after records of another chain continues its own
/// chain's numbering rather than restarting or inheriting another chain's state.
pub struct StructureBuilder {
    builders: Vec<ChainBuilder>,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            builders: Vec::new(),
        }
    }

    /// Routes one atom record to its chain, creating the chain on first sight.
    pub fn add_record(&mut self, record: &AtomRecord) {
        match self.builders.iter_mut().find(|b| b.id == record.chain_id) {
            Some(builder) => builder.add_record(record),
            None => {
                let mut builder = ChainBuilder::new(record.chain_id);
                builder.add_record(record);
                self.builders.push(builder);
            }
        }
    }

    pub fn build(self) -> Structure {
        Structure {
            chains: self.builders.into_iter().map(ChainBuilder::build).collect(),
        }
    }
}
