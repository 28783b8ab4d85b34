//! Core library for bonus description processing.
//!
//! This crate provides:
//! - Per-currency pattern catalog for deposit extraction
//! - Row parser extracting deposit, bet and free-spin terms from free text
//! - Table loading (CSV, XLSX/XLS/ODS), column normalization and export

pub mod error;
pub mod models;
pub mod extract;
pub mod table;

pub use error::{BonusError, Result};
pub use models::bonus::{BonusRow, Currency, ParseResult, ProcessedRow};
pub use models::config::BonusConfig;
pub use extract::{BetTrimPolicy, RowParser};
pub use table::{ProcessingSummary, TableFormat};
