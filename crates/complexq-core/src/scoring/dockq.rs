/// One fixed logistic curve `L / (1 + exp(-k * (x - x0))) + b`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LogisticFit {
    l: f64,
    x0: f64,
    k: f64,
    b: f64,
}

impl LogisticFit {
    fn evaluate(&self, x: f64) -> f64 {
        self.l / (1.0 + (-self.k * (x - self.x0)).exp()) + self.b
    }
}

/// mpDockQ fit for complexes with more than two chains (Bryant et al., 2022,
/// Nat. Commun. 13:6028).
const MPDOCKQ_FIT: LogisticFit = LogisticFit {
    l: 0.827,
    x0: 261.398,
    k: 0.036,
    b: 0.221,
};

/// pDockQ fit for two-chain complexes (Bryant et al., 2022, Nat. Commun. 13:1265).
const PDOCKQ_FIT: LogisticFit = LogisticFit {
    l: 0.724,
    x0: 152.611,
    k: 0.052,
    b: 0.018,
};

/// The bounded docking-quality estimate of one complex, together with the chain
/// count that selected the formula. Computed once per complex and immutable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QualityScore {
    pub value: f64,
    pub chain_count: usize,
}

/// Maps a raw complex score onto the mpDockQ estimate.
///
/// Only valid for complexes with more than two chains; two-chain complexes use
/// [`pdockq`] and its independently fit curve.
pub fn mpdockq(complex_score: f64) -> f64 {
    MPDOCKQ_FIT.evaluate(complex_score)
}

/// Maps a two-chain interface score onto the pDockQ estimate.
///
/// A degenerate interface (`None`, no contacts found) yields exactly 0 without
/// evaluating the logistic curve.
pub fn pdockq(interface_score: Option<f64>) -> f64 {
    match interface_score {
        Some(x) => PDOCKQ_FIT.evaluate(x),
        None => 0.0,
    }
}
