use crate::core::models::confidence::ConfidenceReport;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfidenceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads a confidence report from a JSON stream.
///
/// Fields absent from the document deserialize to their missing defaults (empty
/// per-residue array, `None` scalars); only malformed JSON is an error.
pub fn read_confidence(reader: impl Read) -> Result<ConfidenceReport, ConfidenceError> {
    let report = serde_json::from_reader(reader)?;
    Ok(report)
}

/// Reads a confidence report from a file path.
pub fn read_confidence_from_path<P: AsRef<Path>>(path: P) -> Result<ConfidenceReport, ConfidenceError> {
    let file = File::open(path)?;
    read_confidence(BufReader::new(file))
}
