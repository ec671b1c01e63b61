use super::contacts::find_contacts;
use super::error::ScoringError;
use crate::core::models::chain::{Chain, Structure};

/// Distance threshold for inter-chain contacts, in Angstroms.
pub const CONTACT_DISTANCE_CUTOFF: f64 = 8.0;

/// Scores all interfaces of a complex with more than two chains.
///
/// For every ordered chain pair (A, B) with A != B, contacts between the chains'
/// interface representatives are detected at [`CONTACT_DISTANCE_CUTOFF`]. A pair
/// with contacts contributes `log10(n_contacts + 1)` times the mean confidence of
/// the contact endpoints, where every contact adds both endpoints' per-residue
/// confidence to the mean (residues touching several partners are counted once per
/// contact). The raw complex score is the sum over all ordered pairs, so each
/// unordered pair is counted twice, once per direction. Zero when no chain pair has
/// any contact.
///
/// `plddt_per_chain` supplies the per-residue confidence slice of each chain, in
/// chain order, aligned with the chain's Cα trace.
///
/// # Errors
///
/// Returns [`ScoringError::ConfidenceMismatch`] when a chain has more interface
/// representatives than confidence values, which would leave contacts without a
/// confidence to average.
pub fn raw_complex_score(
    structure: &Structure,
    plddt_per_chain: &[&[f64]],
) -> Result<f64, ScoringError> {
    let chains = structure.chains();

    for (chain, plddt) in chains.iter().zip(plddt_per_chain) {
        if chain.cb_indices().len() > plddt.len() {
            return Err(ScoringError::ConfidenceMismatch {
                chain: chain.id,
                representatives: chain.cb_indices().len(),
                confidences: plddt.len(),
            });
        }
    }

    let cb_coords: Vec<_> = chains.iter().map(Chain::cb_coords).collect();

    let mut total = 0.0;
    for i in 0..chains.len() {
        for j in 0..chains.len() {
            if i == j {
                continue;
            }

            let contacts = find_contacts(&cb_coords[i], &cb_coords[j], CONTACT_DISTANCE_CUTOFF);
            if contacts.is_empty() {
                continue;
            }

            let endpoint_sum: f64 = contacts
                .pairs()
                .iter()
                .map(|&(a, b)| plddt_per_chain[i][a] + plddt_per_chain[j][b])
                .sum();
            let mean_confidence = endpoint_sum / (2 * contacts.len()) as f64;
            total += ((contacts.len() + 1) as f64).log10() * mean_confidence;
        }
    }

    Ok(total)
}

/// Computes the interface score of a two-chain complex.
///
/// Contacts between the chains' interface representatives are detected at
/// `threshold`. With no contact the interface is degenerate and `None` is returned
/// so the caller can short-circuit to a zero quality without evaluating a
/// logarithm of zero. Otherwise the mean confidence is taken over the *unique*
/// contacting residues of both chains (deduplicated per chain, unlike the N-chain
/// formula) using the per-atom confidence carried in the structure file, and the
/// score is `mean_confidence * log10(n_contacts)` with the raw, non-deduplicated
/// contact count.
pub fn two_chain_interface_score(a: &Chain, b: &Chain, threshold: f64) -> Option<f64> {
    let contacts = find_contacts(&a.cb_coords(), &b.cb_coords(), threshold);
    if contacts.is_empty() {
        return None;
    }

    let confidences_a = a.cb_confidences();
    let confidences_b = b.cb_confidences();
    let unique_a = contacts.unique_left();
    let unique_b = contacts.unique_right();

    let sum: f64 = unique_a.iter().map(|&i| confidences_a[i]).sum::<f64>()
        + unique_b.iter().map(|&j| confidences_b[j]).sum::<f64>();
    let mean_confidence = sum / (unique_a.len() + unique_b.len()) as f64;

    Some(mean_confidence * (contacts.len() as f64).log10())
}
