//! Error types for the bonus-core library.

use thiserror::Error;

/// Main error type for the bonus library.
#[derive(Error, Debug)]
pub enum BonusError {
    /// Table loading or export error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reading or writing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to tabular input and output.
#[derive(Error, Debug)]
pub enum TableError {
    /// One or more required columns are absent from the header row.
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// The file extension is not a supported table format.
    #[error("unsupported table format: {0}")]
    UnsupportedFormat(String),

    /// Failed to open or read a spreadsheet.
    #[error("failed to read workbook: {0}")]
    Workbook(String),

    /// The spreadsheet has no worksheet or no header row.
    #[error("table is empty")]
    Empty,

    /// Failed to write a spreadsheet.
    #[error("failed to write workbook: {0}")]
    XlsxWrite(#[from] rust_xlsxwriter::XlsxError),
}

/// Errors raised inside a single description parse.
///
/// These never leave [`RowParser::parse`](crate::extract::RowParser::parse);
/// they are turned into [`ParseResult::Unparsed`](crate::ParseResult::Unparsed).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// Required field is missing.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Result type for the bonus library.
pub type Result<T> = std::result::Result<T, BonusError>;
