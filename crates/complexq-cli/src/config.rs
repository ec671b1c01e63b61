use crate::error::{CliError, Result};
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Matches rank-1 structure files; capture group 1 is the complex identifier.
const DEFAULT_STRUCTURE_PATTERN: &str = r"^(.+)_[^_]+_rank_001_.*\.pdb$";
/// Matches rank-1 confidence files; capture group 1 is the complex identifier.
const DEFAULT_SCORES_PATTERN: &str = r"^(.+)_scores_rank_001_.*\.json$";
const DEFAULT_PRECISION: u32 = 4;

/// The raw, optional contents of the TOML configuration file.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub discovery: DiscoverySection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DiscoverySection {
    /// Regex pairing structure files to complex ids via its first capture group.
    #[serde(rename = "structure-pattern")]
    pub structure_pattern: Option<String>,
    /// Regex pairing confidence files to complex ids via its first capture group.
    #[serde(rename = "scores-pattern")]
    pub scores_pattern: Option<String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Decimal places kept for derived scores in the exported tables.
    pub precision: Option<u32>,
}

/// The resolved application configuration: file values merged over defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub structure_pattern: Regex,
    pub scores_pattern: Regex,
    pub precision: u32,
}

impl AppConfig {
    /// Loads the configuration, applying defaults for everything the optional
    /// file does not override.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file_config = match path {
            Some(path) => {
                debug!("Loading configuration file from {:?}", path);
                let text = fs::read_to_string(path)?;
                toml::from_str(&text).map_err(|e| {
                    CliError::Config(format!("failed to parse '{}': {}", path.display(), e))
                })?
            }
            None => FileConfig::default(),
        };
        Self::resolve(file_config)
    }

    fn resolve(file_config: FileConfig) -> Result<Self> {
        let structure_pattern = compile_id_pattern(
            file_config
                .discovery
                .structure_pattern
                .as_deref()
                .unwrap_or(DEFAULT_STRUCTURE_PATTERN),
            "structure-pattern",
        )?;
        let scores_pattern = compile_id_pattern(
            file_config
                .discovery
                .scores_pattern
                .as_deref()
                .unwrap_or(DEFAULT_SCORES_PATTERN),
            "scores-pattern",
        )?;

        Ok(Self {
            structure_pattern,
            scores_pattern,
            precision: file_config.output.precision.unwrap_or(DEFAULT_PRECISION),
        })
    }
}

fn compile_id_pattern(pattern: &str, name: &str) -> Result<Regex> {
    let regex = Regex::new(pattern)
        .map_err(|e| CliError::Config(format!("invalid {} '{}': {}", name, pattern, e)))?;
    if regex.captures_len() < 2 {
        return Err(CliError::Config(format!(
            "{} '{}' must contain a capture group for the complex id",
            name, pattern
        )));
    }
    Ok(regex)
}
