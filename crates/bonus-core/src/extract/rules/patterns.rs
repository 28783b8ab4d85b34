//! Common regex patterns for bonus description extraction.

use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::bonus::Currency;

/// Phrase that introduces the minimum deposit.
pub const DEPOSIT_MARKER: &str = "на депозит от";

lazy_static! {
    // Any run of whitespace, collapsed before matching
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Standalone "по" introducing the bet amounts. Word-bounded: a substring
    // search would hit "депозит" before the real marker.
    pub static ref BET_MARKER: Regex = Regex::new(r"\bпо\b").unwrap();

    // Free-spin grant: "100 FS (х40)" with Cyrillic х
    pub static ref FREE_SPIN: Regex = Regex::new(r"\d+ FS \(х\d+\)").unwrap();

    // Deposit pattern per currency. Group 1 is the text skipped after the
    // marker, group 2 the digit run before the code.
    static ref DEPOSIT_PATTERNS: HashMap<Currency, Regex> = Currency::ALL
        .into_iter()
        .map(|currency| (currency, Regex::new(&deposit_regex(currency)).unwrap()))
        .collect();
}

fn deposit_regex(currency: Currency) -> String {
    format!(
        r"{}(.*?)([\d\s]+) {}",
        regex::escape(DEPOSIT_MARKER),
        regex::escape(currency.code())
    )
}

/// Deposit pattern for a supported currency.
pub fn deposit_pattern(currency: Currency) -> &'static Regex {
    &DEPOSIT_PATTERNS[&currency]
}

/// Deposit pattern for a raw currency code; `None` for unsupported codes.
pub fn lookup_deposit_pattern(code: &str) -> Option<&'static Regex> {
    Currency::from_code(code).map(deposit_pattern)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_currency_has_pattern() {
        for currency in Currency::ALL {
            let text = format!("на депозит от 1 000 {}", currency.code());
            assert!(deposit_pattern(currency).is_match(&text), "{}", currency);
        }
    }

    #[test]
    fn test_lookup_unknown_currency() {
        assert!(lookup_deposit_pattern("USD").is_none());
        assert!(lookup_deposit_pattern("").is_none());
        assert!(lookup_deposit_pattern("KZT").is_some());
    }

    #[test]
    fn test_bet_marker_is_standalone() {
        assert!(BET_MARKER.is_match("ставка по 100 RUB"));
        assert!(BET_MARKER.is_match("по 100 RUB"));
        assert!(!BET_MARKER.is_match("депозит получите"));
    }

    #[test]
    fn test_free_spin_requires_cyrillic_x() {
        assert!(FREE_SPIN.is_match("100 FS (х40)"));
        assert!(!FREE_SPIN.is_match("100 FS (x40)"));
        assert!(!FREE_SPIN.is_match("100FS (х40)"));
    }
}
