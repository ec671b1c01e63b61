use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("complex has {count} resolvable chain(s); interface scoring requires at least 2")]
    TooFewChains { count: usize },

    #[error(
        "chain {chain}: {representatives} interface representatives but only {confidences} per-residue confidence values"
    )]
    ConfidenceMismatch {
        chain: char,
        representatives: usize,
        confidences: usize,
    },
}
