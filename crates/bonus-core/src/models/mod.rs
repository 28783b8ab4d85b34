//! Data models for bonus descriptions and configuration.

pub mod bonus;
pub mod config;

pub use bonus::{BonusRow, Currency, ParseResult, ProcessedRow};
pub use config::{BonusConfig, OutputConfig, ParserConfig};
