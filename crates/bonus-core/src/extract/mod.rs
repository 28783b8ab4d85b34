//! Bonus term extraction from description text.

mod parser;
pub mod rules;

pub use parser::RowParser;
pub use rules::bet::BetTrimPolicy;

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;
