use super::rank;
use crate::core::io::confidence::{ConfidenceError, read_confidence_from_path};
use crate::core::io::pdb::{PdbError, read_structure_from_path};
use crate::core::models::chain::Chain;
use crate::core::models::complex::ComplexPrediction;
use crate::core::models::confidence::ConfidenceLengthError;
use crate::scoring::complex::{raw_complex_score, two_chain_interface_score};
use crate::scoring::dockq::{QualityScore, mpdockq, pdockq};
use crate::scoring::error::ScoringError;
use crate::scoring::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// One already-paired batch entry: a structure file and its confidence report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexInput {
    pub id: String,
    pub structure_path: PathBuf,
    pub confidence_path: PathBuf,
}

/// One row of the ranked batch table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplexScoreRecord {
    /// Complex identifier.
    pub id: String,
    /// Mean per-residue confidence over the whole complex.
    pub plddt: Option<f64>,
    /// Template-modeling confidence.
    pub ptm: Option<f64>,
    /// Pairwise-interaction confidence.
    pub iptm: Option<f64>,
    /// Docking-quality estimate (pDockQ or mpDockQ by chain count).
    pub dockq: f64,
}

/// Why one complex was excluded from the ranked table. The batch continues past
/// any of these.
#[derive(Debug, Error)]
pub enum SkipReason {
    #[error("failed to parse structure: {0}")]
    Structure(#[from] PdbError),
    #[error("failed to read confidence report: {0}")]
    Confidence(#[from] ConfidenceError),
    #[error("{0}")]
    ConfidenceLength(#[from] ConfidenceLengthError),
    #[error("{0}")]
    Scoring(#[from] ScoringError),
}

#[derive(Debug)]
pub struct SkippedComplex {
    pub id: String,
    pub reason: SkipReason,
}

/// Caller-facing knobs of the batch workflow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchOptions {
    /// Contact threshold for the two-chain pathway, in Angstroms.
    pub contact_threshold: f64,
    /// Decimal places kept for exported quality scores.
    pub precision: u32,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            contact_threshold: crate::scoring::complex::CONTACT_DISTANCE_CUTOFF,
            precision: 4,
        }
    }
}

/// The outcome of one batch run: ranked records plus per-complex skips.
#[derive(Debug)]
pub struct BatchReport {
    pub records: Vec<ComplexScoreRecord>,
    pub skipped: Vec<SkippedComplex>,
}

/// Reads and pairs the two input files of one complex.
pub fn load_prediction(input: &ComplexInput) -> Result<ComplexPrediction, SkipReason> {
    let structure = read_structure_from_path(&input.structure_path)?;
    let confidence = read_confidence_from_path(&input.confidence_path)?;
    Ok(ComplexPrediction {
        id: input.id.clone(),
        structure,
        confidence,
    })
}

/// Scores one parsed prediction.
///
/// Dispatches on chain count: exactly two chains use the pDockQ pathway with the
/// given contact threshold; more than two use the mpDockQ pathway at the fixed
/// cutoff. Scoring is pure, so repeated calls on the same prediction return
/// bit-identical results.
///
/// # Errors
///
/// A complex with fewer than two resolvable chains has no interface to score and
/// fails with [`ScoringError::TooFewChains`]; confidence arrays that cannot cover
/// the structure fail with the respective length errors.
pub fn score_prediction(
    prediction: &ComplexPrediction,
    contact_threshold: f64,
) -> Result<QualityScore, SkipReason> {
    let chains = prediction.structure.chains();
    match chains.len() {
        count @ (0 | 1) => Err(ScoringError::TooFewChains { count }.into()),
        2 => {
            let x = two_chain_interface_score(&chains[0], &chains[1], contact_threshold);
            Ok(QualityScore {
                value: pdockq(x),
                chain_count: 2,
            })
        }
        count => {
            let residue_counts: Vec<usize> = chains.iter().map(Chain::residue_count).collect();
            let plddt_per_chain = prediction.confidence.split_by_chain(&residue_counts)?;
            let raw = raw_complex_score(&prediction.structure, &plddt_per_chain)?;
            Ok(QualityScore {
                value: mpdockq(raw),
                chain_count: count,
            })
        }
    }
}

/// Scores a batch of predicted complexes and ranks the results best-first.
///
/// Every complex is scored independently on the rayon pool; the only merge point
/// is the final append-then-sort, which keeps the ranking deterministic. No
/// per-complex failure is fatal to the batch: failures are collected as
/// [`SkippedComplex`] entries and reported in the returned [`BatchReport`].
#[instrument(skip_all, name = "batch_scoring_workflow")]
pub fn run(
    inputs: &[ComplexInput],
    options: &BatchOptions,
    reporter: &ProgressReporter,
) -> BatchReport {
    info!("Scoring batch of {} complex(es).", inputs.len());
    reporter.report(Progress::BatchStart {
        total: inputs.len() as u64,
    });

    let outcomes: Vec<Result<ComplexScoreRecord, SkippedComplex>> = inputs
        .par_iter()
        .map(|input| {
            let outcome = score_one(input, options);
            reporter.report(Progress::ComplexScored);
            outcome
        })
        .collect();

    reporter.report(Progress::BatchFinish);

    let mut records = Vec::new();
    let mut skipped = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(record) => records.push(record),
            Err(skip) => {
                warn!("Skipping complex {}: {}", skip.id, skip.reason);
                skipped.push(skip);
            }
        }
    }

    rank::rank_records(&mut records);
    if !skipped.is_empty() {
        reporter.report(Progress::Message(format!(
            "{} complex(es) skipped during scoring",
            skipped.len()
        )));
    }
    info!(
        "Batch complete: {} scored, {} skipped.",
        records.len(),
        skipped.len()
    );
    BatchReport { records, skipped }
}

fn score_one(
    input: &ComplexInput,
    options: &BatchOptions,
) -> Result<ComplexScoreRecord, SkippedComplex> {
    let skip = |reason: SkipReason| SkippedComplex {
        id: input.id.clone(),
        reason,
    };

    let prediction = load_prediction(input).map_err(&skip)?;
    let quality = score_prediction(&prediction, options.contact_threshold).map_err(&skip)?;
    debug!(
        "Scored complex {} ({} chains): dockq = {:.4}",
        prediction.id, quality.chain_count, quality.value
    );

    Ok(ComplexScoreRecord {
        id: prediction.id,
        plddt: prediction.confidence.mean_plddt(),
        ptm: prediction.confidence.ptm,
        iptm: prediction.confidence.iptm,
        dockq: round_to_digits(quality.value, options.precision),
    })
}

/// Rounds a value to the given number of decimal places.
pub fn round_to_digits(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
