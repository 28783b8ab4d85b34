//! Minimum deposit extraction.

use super::patterns::{deposit_pattern, BET_MARKER};
use super::{ExtractionMatch, FieldExtractor};
use crate::models::bonus::Currency;

/// Deposit field extractor for one currency.
pub struct DepositExtractor {
    currency: Currency,
}

impl DepositExtractor {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }
}

/// True when the text skipped after the marker runs into the bet clause,
/// so the amount found belongs to the bet and not to the deposit.
fn leaves_deposit_clause(skipped: &str) -> bool {
    BET_MARKER.is_match(skipped)
}

impl FieldExtractor for DepositExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for caps in deposit_pattern(self.currency).captures_iter(text) {
            let (Some(full), Some(skipped), Some(amount)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            if leaves_deposit_clause(skipped.as_str()) {
                continue;
            }

            let digits: String = amount
                .as_str()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if digits.is_empty() {
                continue;
            }

            results.push(
                ExtractionMatch::new(format!("{} {}", digits, self.currency), full.as_str())
                    .with_position(full.start(), full.end()),
            );
        }

        results
    }
}

/// Extract the deposit for a raw currency code.
///
/// Unsupported codes never match.
pub fn extract_deposit(text: &str, currency: &str) -> Option<String> {
    let currency = Currency::from_code(currency)?;
    DepositExtractor::new(currency).extract(text).map(|m| m.value)
}
