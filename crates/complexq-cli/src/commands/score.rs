use crate::cli::ScoreArgs;
use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::utils::discovery::pair_prediction_files;
use crate::utils::progress::CliProgressHandler;
use complexq::core::io::report::write_records_to_path;
use complexq::scoring::progress::ProgressReporter;
use complexq::workflows::score::{BatchOptions, run as run_batch};
use tracing::{info, warn};

pub fn run(args: ScoreArgs) -> Result<()> {
    let config = AppConfig::load(args.config.as_deref())?;

    if !args.input.is_dir() {
        return Err(CliError::Argument(format!(
            "prediction folder does not exist: {}",
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

    info!("Scoring predicted protein complexes");
    info!("Prediction folder: {}", args.input.display());
    info!("Output CSV path:   {}", args.output.display());

    let (inputs, incomplete) = pair_prediction_files(
        &args.input,
        &config.structure_pattern,
        &config.scores_pattern,
    )?;
    for entry in &incomplete {
        warn!("No {} found for complex {}. Skipping.", entry.missing, entry.id);
    }
    info!("Number of protein complexes found: {}", inputs.len());

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let options = BatchOptions {
        precision: config.precision,
        ..Default::default()
    };

    let report = run_batch(&inputs, &options, &reporter);

    info!(
        "Exporting sorted scores (best first) in CSV format to {}",
        args.output.display()
    );
    write_records_to_path(&args.output, &report.records).map_err(|source| CliError::Report {
        path: args.output.clone(),
        source,
    })?;

    let total_skipped = report.skipped.len() + incomplete.len();
    println!(
        "Scored {} complex(es), skipped {}. Results written to: {}",
        report.records.len(),
        total_skipped,
        args.output.display()
    );

    Ok(())
}
