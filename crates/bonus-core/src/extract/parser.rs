//! Row parser combining the deposit, bet and free-spin rules.

use tracing::{debug, trace};

use crate::error::ExtractionError;
use crate::models::bonus::{Currency, ParseResult};
use crate::models::config::ParserConfig;

use super::rules::{
    normalize_whitespace, BetExtractor, BetTrimPolicy, DepositExtractor, FieldExtractor,
    FreeSpinExtractor,
};
use super::Result;

/// The three terms of a fully parsed description.
#[derive(Debug)]
struct BonusTerms {
    deposit: String,
    bet: String,
    free_spin: String,
}

/// Parser for single bonus descriptions.
#[derive(Debug, Clone, Default)]
pub struct RowParser {
    /// Slot context trimming applied to the bet text.
    bet_trim: BetTrimPolicy,
}

impl RowParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new().with_bet_trim(config.bet_trim)
    }

    /// Set the bet trimming policy.
    pub fn with_bet_trim(mut self, trim: BetTrimPolicy) -> Self {
        self.bet_trim = trim;
        self
    }

    /// Parse one description for the given currency code.
    ///
    /// Never fails: anything short of all three terms yields
    /// [`ParseResult::Unparsed`] with the normalized text.
    pub fn parse(&self, description: &str, currency: &str) -> ParseResult {
        let normalized = normalize_whitespace(description);

        match self.extract_terms(&normalized, currency) {
            Ok(terms) => {
                trace!(currency, ?terms, "description parsed");
                ParseResult::Extracted {
                    deposit: terms.deposit,
                    bet: terms.bet,
                    free_spin: terms.free_spin,
                }
            }
            Err(e) => {
                debug!(currency, "description left unparsed: {}", e);
                ParseResult::Unparsed {
                    original: normalized,
                }
            }
        }
    }

    /// Run every rule, then require all of them to have matched.
    fn extract_terms(&self, text: &str, currency: &str) -> Result<BonusTerms> {
        let deposit = Currency::from_code(currency)
            .and_then(|c| DepositExtractor::new(c).extract(text));
        let bet = BetExtractor::new(currency)
            .with_trim(self.bet_trim)
            .extract(text);
        let free_spin = FreeSpinExtractor::new().extract(text);

        for (field, found) in [("deposit", &deposit), ("bet", &bet), ("free_spin", &free_spin)] {
            match found {
                Some(m) => trace!(field, source = %m.source, position = ?m.position, "rule matched"),
                None => trace!(field, "rule did not match"),
            }
        }

        Ok(BonusTerms {
            deposit: deposit
                .ok_or(ExtractionError::MissingField("deposit"))?
                .value,
            bet: bet.ok_or(ExtractionError::MissingField("bet"))?.value,
            free_spin: free_spin
                .ok_or(ExtractionError::MissingField("free_spin"))?
                .value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FULL: &str = "Привет! Сделайте депозит на депозит от 50 000 RUB, сделайте ставку по 50 000 RUB / 50 000 KZT в слоте Book of Ra, получите 100 FS (х40)";

    fn unparsed(text: &str) -> ParseResult {
        ParseResult::Unparsed {
            original: text.to_string(),
        }
    }

    #[test]
    fn test_parse_full_description() {
        let result = RowParser::new().parse(FULL, "RUB");

        assert_eq!(
            result,
            ParseResult::Extracted {
                deposit: "50000 RUB".to_string(),
                bet: "50 000 RUB".to_string(),
                free_spin: "100 FS (х40)".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_other_currency_without_deposit() {
        let parser = RowParser::new();

        assert_eq!(
            BetExtractor::new("KZT").extract(FULL).map(|m| m.value),
            Some("50 000 KZT".to_string())
        );
        assert_eq!(parser.parse(FULL, "KZT"), unparsed(FULL));
    }

    #[test]
    fn test_parse_currency_list_deposit() {
        let text = "на депозит от 1 000 RUB / 5 000 KZT, ставка по 10 RUB / 50 KZT в слоте X, 10 FS (х5)";

        assert_eq!(
            RowParser::new().parse(text, "KZT"),
            ParseResult::Extracted {
                deposit: "5000 KZT".to_string(),
                bet: "50 KZT".to_string(),
                free_spin: "10 FS (х5)".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_bet_before_bare_slot_marker() {
        let text = "на депозит от 500 RUB, ставка по 100 RUB слоте Gates / 200 KZT в слоте Book, 10 FS (х5)";

        assert_eq!(RowParser::new().parse(text, "RUB").bet(), Some("100 RUB"));
    }

    #[test]
    fn test_match_positions_point_at_source() {
        let text = "Бонус на депозит от 1 000 RUB, ставка по 10 RUB в слоте X, 25 FS (х30)";

        let deposit = DepositExtractor::new(Currency::Rub).extract(text).unwrap();
        let free_spin = FreeSpinExtractor::new().extract(text).unwrap();
        for m in [&deposit, &free_spin] {
            let (start, end) = m.position.unwrap();
            assert_eq!(&text[start..end], m.source);
        }
        assert_eq!(free_spin.source, free_spin.value);
        assert_eq!(deposit.source, "на депозит от 1 000 RUB");
    }

    #[test]
    fn test_parse_without_free_spins() {
        let text = "на депозит от 1 000 AZN, ставка по 10 AZN в слоте Book of Ra";
        assert_eq!(RowParser::new().parse(text, "AZN"), unparsed(text));
    }

    #[test]
    fn test_parse_without_bet_marker() {
        let text = "на депозит от 1 000 AZN, ставка 10 AZN, получите 20 FS (х30)";
        assert_eq!(RowParser::new().parse(text, "AZN"), unparsed(text));
    }

    #[test]
    fn test_parse_trims_slot_context() {
        let text = "Бонус на депозит от 1 000 RUB, ставка по 1000 RUB в слоте Sweet Bonanza, 50 FS (х35)";

        let result = RowParser::new().parse(text, "RUB");
        assert_eq!(result.bet(), Some("1000 RUB"));
        assert_eq!(result.deposit(), Some("1000 RUB"));
    }

    #[test]
    fn test_parse_keep_all_policy() {
        let text = "Бонус на депозит от 1 000 RUB, ставка по 1000 RUB в слоте Sweet Bonanza, 50 FS (х35)";

        let result = RowParser::new()
            .with_bet_trim(BetTrimPolicy::KeepAll)
            .parse(text, "RUB");
        assert_eq!(
            result.bet(),
            Some("1000 RUB в слоте Sweet Bonanza, 50 FS (х35)")
        );
    }

    #[test]
    fn test_parse_normalizes_whitespace() {
        let text = "на  депозит\tот\n2 000 MXN,\r\nставка   по 20 MXN, 10 FS (х5)";

        let result = RowParser::new().parse(text, "MXN");
        assert_eq!(result.deposit(), Some("2000 MXN"));
        assert_eq!(result.bet(), Some("20 MXN, 10 FS (х5)"));
        assert_eq!(result.free_spin(), Some("10 FS (х5)"));
    }

    #[test]
    fn test_unparsed_keeps_normalized_text() {
        let result = RowParser::new().parse("  нет\t\tбонуса \n", "TRY");
        assert_eq!(result, unparsed(" нет бонуса "));
    }

    #[test]
    fn test_unknown_currency_never_extracts() {
        let text = "на депозит от 100 USD, ставка по 1 USD, 10 FS (х10)";

        for currency in ["USD", "", "rub", "RUBX"] {
            let result = RowParser::new().parse(text, currency);
            assert!(!result.is_extracted(), "{:?}", currency);
            assert_eq!(result.deposit(), None);
        }
    }

    #[test]
    fn test_parse_arbitrary_input() {
        let parser = RowParser::new();
        let inputs = ["", " ", "по", "/", "на депозит от", "FS (х)", "по / / /"];

        for input in inputs {
            for currency in ["RUB", "KZT", "", "???"] {
                assert!(!parser.parse(input, currency).is_extracted());
            }
        }
    }

    #[test]
    fn test_deposit_shape_for_all_currencies() {
        let parser = RowParser::new();

        for currency in Currency::ALL {
            let code = currency.code();
            let text = format!(
                "на депозит от 1 2 3 {code}, ставка по 5 {code} в слоте X, 7 FS (х9)"
            );
            let result = parser.parse(&text, code);

            let deposit = result.deposit().unwrap();
            let (digits, suffix) = deposit.split_once(' ').unwrap();
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(suffix, code);
            assert_eq!(digits, "123");
        }
    }

    #[test]
    fn test_from_config() {
        let config = ParserConfig {
            bet_trim: BetTrimPolicy::KeepAll,
        };
        let parser = RowParser::from_config(&config);
        assert_eq!(parser.bet_trim, BetTrimPolicy::KeepAll);
    }
}
