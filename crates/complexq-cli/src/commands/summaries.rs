use crate::cli::SummariesArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use complexq::core::io::report::write_records_to_path;
use complexq::workflows::score::round_to_digits;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SUMMARY_FILE_SUFFIX: &str = "_summary_confidences.json";
const IPTM_WEIGHT: f64 = 0.8;
const PTM_WEIGHT: f64 = 0.2;

/// The top-level fields extracted from one summary confidence file. Absent fields
/// stay missing rather than defaulting to a number.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct SummaryConfidences {
    fraction_disordered: Option<f64>,
    has_clash: Option<f64>,
    iptm: Option<f64>,
    ptm: Option<f64>,
    ranking_score: Option<f64>,
}

/// One row of the exported summary table.
#[derive(Debug, Clone, Serialize)]
struct SummaryRecord {
    id: String,
    fraction_disordered: Option<f64>,
    has_clash: Option<f64>,
    iptm: Option<f64>,
    ptm: Option<f64>,
    ranking_score: Option<f64>,
    confidence: Option<f64>,
}

pub fn run(args: SummariesArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;

    if !args.input.is_dir() {
        return Err(CliError::Argument(format!(
            "predictions folder does not exist: {}",
            args.input.display()
        )));
    }
    if let Some(parent) = args.output.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(CliError::Argument(format!(
            "output folder does not exist: {}",
            parent.display()
        )));
    }

    info!("Extracting model confidence summaries");
    info!("Predictions folder: {}", args.input.display());
    info!("Output CSV path:    {}", args.output.display());

    let mut paths = Vec::new();
    collect_summary_paths(&args.input, &mut paths)?;
    paths.sort();
    info!("Number of results found: {}", paths.len());

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        match read_summary(path) {
            Ok(summary) => records.push(to_record(path, summary, config.precision)),
            Err(e) => warn!("Skipping unreadable summary file {:?}: {}", path, e),
        }
    }

    rank_summaries(&mut records);

    info!(
        "Exporting sorted summaries (best first) in CSV format to {}",
        args.output.display()
    );
    write_records_to_path(&args.output, &records).map_err(|source| CliError::Report {
        path: args.output.clone(),
        source,
    })?;

    println!(
        "Extracted {} summary record(s). Results written to: {}",
        records.len(),
        args.output.display()
    );

    Ok(())
}

fn collect_summary_paths(dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_summary_paths(&path, out)?;
        } else if path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(SUMMARY_FILE_SUFFIX))
        {
            out.push(path);
        }
    }
    Ok(())
}

fn read_summary(path: &Path) -> std::result::Result<SummaryConfidences, anyhow::Error> {
    let file = File::open(path)?;
    let summary = serde_json::from_reader(BufReader::new(file))?;
    Ok(summary)
}

fn to_record(path: &Path, summary: SummaryConfidences, precision: u32) -> SummaryRecord {
    let id = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .trim_end_matches(SUMMARY_FILE_SUFFIX)
        .to_string();

    let confidence = match (summary.iptm, summary.ptm) {
        (Some(iptm), Some(ptm)) => Some(round_to_digits(
            IPTM_WEIGHT * iptm + PTM_WEIGHT * ptm,
            precision,
        )),
        _ => None,
    };

    SummaryRecord {
        id,
        fraction_disordered: summary.fraction_disordered,
        has_clash: summary.has_clash,
        iptm: summary.iptm,
        ptm: summary.ptm,
        ranking_score: summary.ranking_score,
        confidence,
    }
}

/// Sorts summaries by derived confidence, descending, missing values last;
/// ties keep encounter order.
fn rank_summaries(records: &mut [SummaryRecord]) {
    records.sort_by(|a, b| match (a.confidence, b.confidence) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn summary_fields_default_to_missing() {
        let summary: SummaryConfidences = serde_json::from_str("{}").unwrap();
        assert_eq!(summary.iptm, None);
        assert_eq!(summary.ptm, None);
        assert_eq!(summary.ranking_score, None);
    }

    #[test]
    fn confidence_is_the_weighted_sum_of_iptm_and_ptm() {
        let summary = SummaryConfidences {
            iptm: Some(0.9),
            ptm: Some(0.5),
            ..Default::default()
        };
        let record = to_record(Path::new("x_summary_confidences.json"), summary, 4);

        assert_eq!(record.id, "x");
        assert_eq!(record.confidence, Some(0.82));
    }

    #[test]
    fn confidence_is_missing_when_either_input_is() {
        let summary = SummaryConfidences {
            iptm: Some(0.9),
            ..Default::default()
        };
        let record = to_record(Path::new("x_summary_confidences.json"), summary, 4);
        assert_eq!(record.confidence, None);
    }

    #[test]
    fn ranking_puts_missing_confidence_last() {
        let record = |id: &str, confidence: Option<f64>| SummaryRecord {
            id: id.to_string(),
            fraction_disordered: None,
            has_clash: None,
            iptm: None,
            ptm: None,
            ranking_score: None,
            confidence,
        };
        let mut records = vec![
            record("none", None),
            record("low", Some(0.2)),
            record("high", Some(0.9)),
        ];
        rank_summaries(&mut records);

        let order: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(order, vec!["high", "low", "none"]);
    }

    #[test]
    fn summary_files_are_collected_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("model_a");
        fs::create_dir(&nested).unwrap();
        fs::write(
            nested.join("model_a_summary_confidences.json"),
            r#"{"iptm": 0.8, "ptm": 0.6}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.json"), "{}").unwrap();

        let mut paths = Vec::new();
        collect_summary_paths(dir.path(), &mut paths).unwrap();

        assert_eq!(paths.len(), 1);
        assert!(paths[0].ends_with("model_a_summary_confidences.json"));
    }
}
