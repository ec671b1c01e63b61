use serde::Deserialize;
use thiserror::Error;

/// The error produced when the per-residue confidence array cannot cover the
/// structure's residues.
#[derive(Debug, Error, PartialEq, Eq)]
#[error(
    "per-residue confidence array holds {available} values but the structure requires {required}"
)]
pub struct ConfidenceLengthError {
    pub required: usize,
    pub available: usize,
}

/// The confidence profile reported alongside one predicted complex.
///
/// Carries the complex-wide per-residue confidence array (ordered to match the Cα
/// backbone trace across all chains) and two optional summary scalars. Absent
/// fields in the source report deserialize to their empty/missing defaults rather
/// than failing; a missing scalar stays `None` throughout the pipeline and is never
/// substituted with a numeric default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfidenceReport {
    /// Per-residue confidence (pLDDT), one value per residue in chain order.
    pub plddt: Vec<f64>,
    /// Template-modeling confidence (pTM).
    pub ptm: Option<f64>,
    /// Pairwise-interaction confidence (ipTM).
    pub iptm: Option<f64>,
}

impl ConfidenceReport {
    /// The mean of the per-residue confidence array, or `None` when it is empty.
    pub fn mean_plddt(&self) -> Option<f64> {
        if self.plddt.is_empty() {
            return None;
        }
        Some(self.plddt.iter().sum::<f64>() / self.plddt.len() as f64)
    }

    /// Splits the per-residue array into consecutive per-chain slices.
    ///
    /// # Arguments
    ///
    /// * `residue_counts` - The residue count of each chain, in chain order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfidenceLengthError`] when the array holds fewer values than the
    /// chains require.
    pub fn split_by_chain(
        &self,
        residue_counts: &[usize],
    ) -> Result<Vec<&[f64]>, ConfidenceLengthError> {
        let required: usize = residue_counts.iter().sum();
        if self.plddt.len() < required {
            return Err(ConfidenceLengthError {
                required,
                available: self.plddt.len(),
            });
        }

        let mut slices = Vec::with_capacity(residue_counts.len());
        let mut offset = 0;
        for &count in residue_counts {
            slices.push(&self.plddt[offset..offset + count]);
            offset += count;
        }
        Ok(slices)
    }
}
