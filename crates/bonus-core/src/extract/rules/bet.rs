//! Bet (wagering) amount extraction.

use serde::{Deserialize, Serialize};

use super::patterns::BET_MARKER;
use super::{ExtractionMatch, FieldExtractor};

/// Slot context markers; the bet text ends where the first one starts.
const SLOT_CONTEXT_MARKERS: [&str; 2] = ["в слоте", "слоте"];

/// How much of the text after "по" is considered for the bet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BetTrimPolicy {
    /// Cut the bet text before "в слоте" / "слоте".
    #[default]
    TrimSlotContext,
    /// Keep everything up to the next "/" separator.
    KeepAll,
}

/// Bet field extractor.
pub struct BetExtractor {
    currency: String,
    trim: BetTrimPolicy,
}

impl BetExtractor {
    /// Create a bet extractor looking for segments that mention `currency`.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            trim: BetTrimPolicy::default(),
        }
    }

    /// Set the slot context trimming policy.
    pub fn with_trim(mut self, trim: BetTrimPolicy) -> Self {
        self.trim = trim;
        self
    }

    /// Text after the first standalone "по", trimmed per policy.
    fn bet_region<'t>(&self, text: &'t str) -> Option<&'t str> {
        let marker = BET_MARKER.find(text)?;
        let after = &text[marker.end()..];

        let region = match self.trim {
            BetTrimPolicy::KeepAll => after,
            BetTrimPolicy::TrimSlotContext => SLOT_CONTEXT_MARKERS
                .iter()
                .filter_map(|m| after.find(m))
                .min()
                .map_or(after, |end| &after[..end]),
        };

        Some(region)
    }
}

impl FieldExtractor for BetExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        if self.currency.is_empty() {
            return Vec::new();
        }

        let Some(region) = self.bet_region(text) else {
            return Vec::new();
        };

        region
            .split('/')
            .map(str::trim)
            .filter(|segment| segment.contains(self.currency.as_str()))
            .map(|segment| ExtractionMatch::new(segment.to_string(), segment))
            .collect()
    }
}

/// Extract the bet segment for a currency code.
pub fn extract_bet(text: &str, currency: &str, trim: BetTrimPolicy) -> Option<String> {
    BetExtractor::new(currency)
        .with_trim(trim)
        .extract(text)
        .map(|m| m.value)
}
