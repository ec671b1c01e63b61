use nalgebra::{DMatrix, Point3};

/// The inter-chain contacts found for one ordered pair of chains.
///
/// Each pair is `(index in chain A, index in chain B)`; indices are local to each
/// chain's representative-coordinate sequence, not global atom indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMap {
    pairs: Vec<(usize, usize)>,
}

impl ContactMap {
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// The number of contact pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sorted, deduplicated chain-A indices that participate in any contact.
    pub fn unique_left(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.pairs.iter().map(|&(a, _)| a).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }

    /// Sorted, deduplicated chain-B indices that participate in any contact.
    pub fn unique_right(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.pairs.iter().map(|&(_, b)| b).collect();
        indices.sort_unstable();
        indices.dedup();
        indices
    }
}

/// Finds all representative-atom pairs of two chains within a distance threshold.
///
/// Builds the pairwise Euclidean distance matrix for the chain pair (rows index
/// `a`, columns index `b`) and selects pairs with distance at or below `threshold`
/// (Angstrom units, no conversion). The computation is deterministic and the pair
/// order follows the input order. Memory is bounded by this single chain pair.
pub fn find_contacts(a: &[Point3<f64>], b: &[Point3<f64>], threshold: f64) -> ContactMap {
    let distances = DMatrix::from_fn(a.len(), b.len(), |i, j| (a[i] - b[j]).norm());

    let mut pairs = Vec::new();
    for i in 0..distances.nrows() {
        for j in 0..distances.ncols() {
            if distances[(i, j)] <= threshold {
                pairs.push((i, j));
            }
        }
    }
    ContactMap { pairs }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn finds_pairs_within_the_threshold() {
        let a = vec![p(0.0, 0.0, 0.0), p(10.0, 10.0, 10.0)];
        let b = vec![p(0.0, 0.0, 1.0)];

        let contacts = find_contacts(&a, &b, 8.0);
        assert_eq!(contacts.pairs(), &[(0, 0)]);
        assert_eq!(contacts.len(), 1);
    }

    #[test]
    fn distance_exactly_at_threshold_is_a_contact() {
        let a = vec![p(0.0, 0.0, 0.0)];
        let b = vec![p(8.0, 0.0, 0.0)];
        assert_eq!(find_contacts(&a, &b, 8.0).len(), 1);
        assert!(find_contacts(&a, &b, 7.999).is_empty());
    }

    #[test]
    fn swap_of_operands_swaps_the_indices() {
        let a = vec![p(0.0, 0.0, 0.0), p(3.0, 0.0, 0.0)];
        let b = vec![p(0.0, 4.0, 0.0), p(100.0, 0.0, 0.0)];

        let forward = find_contacts(&a, &b, 8.0);
        let backward = find_contacts(&b, &a, 8.0);

        let mut swapped: Vec<(usize, usize)> =
            backward.pairs().iter().map(|&(i, j)| (j, i)).collect();
        swapped.sort_unstable();
        let mut expected = forward.pairs().to_vec();
        expected.sort_unstable();
        assert_eq!(swapped, expected);
    }

    #[test]
    fn contacts_are_monotonic_in_the_threshold() {
        let a = vec![p(0.0, 0.0, 0.0), p(5.0, 0.0, 0.0)];
        let b = vec![p(2.0, 0.0, 0.0), p(9.0, 0.0, 0.0)];

        let tight = find_contacts(&a, &b, 3.0);
        let loose = find_contacts(&a, &b, 10.0);
        for pair in tight.pairs() {
            assert!(loose.pairs().contains(pair));
        }
        assert!(loose.len() >= tight.len());
    }

    #[test]
    fn empty_inputs_yield_an_empty_map() {
        assert!(find_contacts(&[], &[p(0.0, 0.0, 0.0)], 8.0).is_empty());
        assert!(find_contacts(&[p(0.0, 0.0, 0.0)], &[], 8.0).is_empty());
    }

    #[test]
    fn unique_indices_are_sorted_and_deduplicated() {
        let a = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0)];
        let b = vec![p(0.0, 1.0, 0.0), p(0.0, 2.0, 0.0)];

        let contacts = find_contacts(&a, &b, 8.0);
        assert_eq!(contacts.len(), 4);
        assert_eq!(contacts.unique_left(), vec![0, 1]);
        assert_eq!(contacts.unique_right(), vec![0, 1]);
    }
}
