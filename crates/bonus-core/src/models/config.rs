//! Configuration structures for bonus processing.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BonusError, Result};
use crate::extract::BetTrimPolicy;

/// Main configuration for the bonus pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusConfig {
    /// Description parser configuration.
    pub parser: ParserConfig,

    /// Output table configuration.
    pub output: OutputConfig,
}

/// Description parser configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Whether the bet text is cut before the slot name.
    pub bet_trim: BetTrimPolicy,
}

/// Output table configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Header of the deposit column.
    pub deposit_header: String,

    /// Header of the bet column.
    pub bet_header: String,

    /// Header of the free-spin column.
    pub free_spin_header: String,

    /// Header of the column holding text that could not be parsed.
    pub original_header: String,

    /// Worksheet name for XLSX output.
    pub sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            deposit_header: "dep".to_string(),
            bet_header: "bet".to_string(),
            free_spin_header: "FS info".to_string(),
            original_header: "Original Text".to_string(),
            sheet_name: "Bonuses".to_string(),
        }
    }
}

impl BonusConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| BonusError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: BonusConfig =
            serde_json::from_str(r#"{"output": {"bet_header": "Ставка"}}"#).unwrap();

        assert_eq!(config.output.bet_header, "Ставка");
        assert_eq!(config.output.deposit_header, "dep");
        assert_eq!(config.parser.bet_trim, BetTrimPolicy::TrimSlotContext);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = BonusConfig::default();
        config.parser.bet_trim = BetTrimPolicy::KeepAll;
        config.output.sheet_name = "Out".to_string();
        config.save(&path).unwrap();

        let loaded = BonusConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = BonusConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, BonusError::Config(_)));
    }
}
