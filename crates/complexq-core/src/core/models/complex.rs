use super::chain::Structure;
use super::confidence::ConfidenceReport;

/// One predicted protein complex paired with its confidence profile.
///
/// A prediction is processed independently of any other and is immutable during
/// scoring. A complex with fewer than two chains has no inter-chain interface and
/// cannot be scored; callers must exclude it before the quality transforms run.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexPrediction {
    /// The batch-unique complex identifier.
    pub id: String,
    /// The parsed chain decomposition of the predicted structure.
    pub structure: Structure,
    /// The confidence profile reported with the prediction.
    pub confidence: ConfidenceReport,
}

impl ComplexPrediction {
    /// The number of chains resolved from the structure.
    pub fn chain_count(&self) -> usize {
        self.structure.chain_count()
    }
}
