use super::score::ComplexScoreRecord;
use std::cmp::Ordering;

/// Sorts batch records best-first.
///
/// Primary key: quality score, descending. Secondary key: pairwise-interaction
/// confidence (ipTM), descending, with a missing value ordering after any present
/// one. The sort is stable, so records tied on both keys keep encounter order.
pub fn rank_records(records: &mut [ComplexScoreRecord]) {
    records.sort_by(|a, b| {
        b.dockq
            .partial_cmp(&a.dockq)
            .unwrap_or(Ordering::Equal)
            .then_with(|| descending_with_missing_last(a.iptm, b.iptm))
    });
}

fn descending_with_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, dockq: f64, iptm: Option<f64>) -> ComplexScoreRecord {
        ComplexScoreRecord {
            id: id.to_string(),
            plddt: None,
            ptm: None,
            iptm,
            dockq,
        }
    }

    #[test]
    fn quality_ties_break_on_interaction_confidence() {
        let mut records = vec![
            record("first", 0.9, Some(0.5)),
            record("second", 0.9, Some(0.7)),
            record("third", 0.2, Some(0.99)),
        ];
        rank_records(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["second", "first", "third"]);
    }

    #[test]
    fn missing_interaction_confidence_ranks_after_any_present_value() {
        let mut records = vec![
            record("unknown", 0.5, None),
            record("low", 0.5, Some(0.01)),
        ];
        rank_records(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["low", "unknown"]);
    }

    #[test]
    fn full_ties_keep_encounter_order() {
        let mut records = vec![
            record("a", 0.4, Some(0.6)),
            record("b", 0.4, Some(0.6)),
            record("c", 0.4, None),
            record("d", 0.4, None),
        ];
        rank_records(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d"]);
    }
}
