//! Subcommand implementations.

pub mod batch;
pub mod config;
pub mod parse;
pub mod process;

use std::path::{Path, PathBuf};

use bonus_core::models::config::BonusConfig;
use bonus_core::{BetTrimPolicy, RowParser, TableFormat};
use tracing::debug;

/// Output format selectable on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// CSV table
    Csv,
    /// Excel workbook
    Xlsx,
    /// JSON array of rows
    Json,
}

impl From<OutputFormat> for TableFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => TableFormat::Csv,
            OutputFormat::Xlsx => TableFormat::Xlsx,
            OutputFormat::Json => TableFormat::Json,
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bonus")
        .join("config.json")
}

/// Configuration file in effect: the `--config` path or the default one.
pub fn config_path(config_path: Option<&str>) -> PathBuf {
    config_path.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when no file exists.
///
/// An explicitly given path must exist.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<BonusConfig> {
    if let Some(path) = config_path {
        return Ok(BonusConfig::from_file(Path::new(path))?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Loading config from {}", path.display());
        Ok(BonusConfig::from_file(&path)?)
    } else {
        Ok(BonusConfig::default())
    }
}

/// Build the row parser from configuration and command-line overrides.
pub fn build_parser(config: &BonusConfig, keep_slot_context: bool) -> RowParser {
    let parser = RowParser::from_config(&config.parser);
    if keep_slot_context {
        parser.with_bet_trim(BetTrimPolicy::KeepAll)
    } else {
        parser
    }
}
