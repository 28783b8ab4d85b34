//! Rule-based extractors for bonus description fields.

pub mod patterns;
pub mod deposit;
pub mod bet;
pub mod free_spin;

pub use deposit::{extract_deposit, DepositExtractor};
pub use bet::{extract_bet, BetExtractor, BetTrimPolicy};
pub use free_spin::{extract_free_spin, FreeSpinExtractor};
pub use patterns::{deposit_pattern, lookup_deposit_pattern};

use patterns::WHITESPACE_RUN;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in text order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in the text together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in the searched text, when known.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Collapse every run of whitespace into a single ASCII space.
///
/// Leading and trailing runs are collapsed too, not removed.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}
