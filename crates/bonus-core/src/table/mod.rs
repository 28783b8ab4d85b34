//! Tabular input and output around the row parser.

pub mod columns;
pub mod reader;
pub mod writer;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::extract::RowParser;
use crate::models::bonus::{BonusRow, ProcessedRow};

pub use columns::{canonical_column, ColumnIndex};
pub use reader::{read_csv, read_rows, read_workbook};
pub use writer::{output_headers, write_csv, write_json, write_table, write_xlsx};

/// Output table format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    Csv,
    Xlsx,
    Json,
}

impl TableFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" => Some(Self::Xlsx),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }
}

/// Counts of parse outcomes over a table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub total: usize,
    pub extracted: usize,
    pub unparsed: usize,
}

impl ProcessingSummary {
    /// Tally processed rows.
    pub fn from_rows(rows: &[ProcessedRow]) -> Self {
        let extracted = rows.iter().filter(|r| r.result.is_extracted()).count();
        Self {
            total: rows.len(),
            extracted,
            unparsed: rows.len() - extracted,
        }
    }
}

/// Parse one input row.
pub fn process_row(parser: &RowParser, row: &BonusRow) -> ProcessedRow {
    ProcessedRow {
        user_id: row.user_id.clone(),
        currency: row.currency.clone(),
        result: parser.parse(&row.description, &row.currency),
    }
}

/// Parse every row independently, keeping input order.
pub fn process_rows(parser: &RowParser, rows: &[BonusRow]) -> Vec<ProcessedRow> {
    rows.iter().map(|row| process_row(parser, row)).collect()
}

/// Read a table, parse every row and return the rows with their summary.
pub fn process_file(path: &Path, parser: &RowParser) -> Result<(Vec<ProcessedRow>, ProcessingSummary)> {
    let rows = read_rows(path)?;
    let processed = process_rows(parser, &rows);
    let summary = ProcessingSummary::from_rows(&processed);

    info!(
        "Processed {}: {} extracted, {} unparsed",
        path.display(),
        summary.extracted,
        summary.unparsed
    );

    Ok((processed, summary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_format_from_path() {
        assert_eq!(TableFormat::from_path(Path::new("out.XLSX")), Some(TableFormat::Xlsx));
        assert_eq!(TableFormat::from_path(Path::new("out.csv")), Some(TableFormat::Csv));
        assert_eq!(TableFormat::from_path(Path::new("out")), None);
        assert_eq!(TableFormat::from_path(Path::new("out.xls")), None);
    }

    #[test]
    fn test_process_rows_keeps_identifiers() {
        let rows = vec![
            BonusRow {
                user_id: "u-1".to_string(),
                currency: "TRY".to_string(),
                description: "на депозит от 100 TRY, ставка по 10 TRY в слоте X, 5 FS (х20)"
                    .to_string(),
            },
            BonusRow {
                user_id: "u-2".to_string(),
                currency: "EUR".to_string(),
                description: "на депозит от 100 EUR, ставка по 10 EUR, 5 FS (х20)".to_string(),
            },
        ];

        let processed = process_rows(&RowParser::new(), &rows);

        assert_eq!(processed[0].user_id, "u-1");
        assert_eq!(processed[0].result.deposit(), Some("100 TRY"));
        assert_eq!(processed[0].result.bet(), Some("10 TRY"));
        assert_eq!(processed[1].currency, "EUR");
        assert!(!processed[1].result.is_extracted());

        assert_eq!(
            ProcessingSummary::from_rows(&processed),
            ProcessingSummary {
                total: 2,
                extracted: 1,
                unparsed: 1,
            }
        );
    }

    #[test]
    fn test_process_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(
            &path,
            "User ID,Currency,Description\n1,MXN,\"на депозит от 300 MXN, по 3 MXN, 9 FS (х9)\"\n",
        )
        .unwrap();

        let (rows, summary) = process_file(&path, &RowParser::new()).unwrap();
        assert_eq!(summary.extracted, 1);
        assert_eq!(rows[0].result.free_spin(), Some("9 FS (х9)"));
    }
}
