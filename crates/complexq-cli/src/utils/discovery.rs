use crate::error::Result;
use complexq::workflows::score::ComplexInput;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Which of the two required inputs a discovered complex is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    Structure,
    Confidence,
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingInput::Structure => write!(f, "structure file"),
            MissingInput::Confidence => write!(f, "confidence file"),
        }
    }
}

/// A complex id seen in the folder for which only one of the two inputs exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompletePrediction {
    pub id: String,
    pub missing: MissingInput,
}

#[derive(Default)]
struct CandidateFiles {
    structure: Option<PathBuf>,
    confidence: Option<PathBuf>,
}

/// Pairs the structure and confidence files of every complex in a prediction folder.
///
/// File names are matched against the two id-capturing patterns; entries sharing a
/// captured id form one complex. Ids are collected into an ordered map so the batch
/// order is deterministic regardless of directory iteration order. Ids with only
/// one of the two files are returned separately for diagnostics, not treated as
/// failures.
pub fn pair_prediction_files(
    folder: &Path,
    structure_pattern: &Regex,
    scores_pattern: &Regex,
) -> Result<(Vec<ComplexInput>, Vec<IncompletePrediction>)> {
    let mut candidates: BTreeMap<String, CandidateFiles> = BTreeMap::new();

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if let Some(caps) = structure_pattern.captures(file_name) {
            let id = caps[1].to_string();
            candidates.entry(id).or_default().structure = Some(path);
        } else if let Some(caps) = scores_pattern.captures(file_name) {
            let id = caps[1].to_string();
            candidates.entry(id).or_default().confidence = Some(path);
        }
    }

    let mut inputs = Vec::new();
    let mut incomplete = Vec::new();
    for (id, files) in candidates {
        match (files.structure, files.confidence) {
            (Some(structure_path), Some(confidence_path)) => inputs.push(ComplexInput {
                id,
                structure_path,
                confidence_path,
            }),
            (None, Some(_)) => incomplete.push(IncompletePrediction {
                id,
                missing: MissingInput::Structure,
            }),
            (Some(_), None) => incomplete.push(IncompletePrediction {
                id,
                missing: MissingInput::Confidence,
            }),
            (None, None) => {}
        }
    }

    Ok((inputs, incomplete))
}
