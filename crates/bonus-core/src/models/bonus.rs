//! Bonus description data models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Currencies with a deposit pattern in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Russian ruble.
    Rub,
    /// Kazakhstani tenge.
    Kzt,
    /// Azerbaijani manat.
    Azn,
    /// Turkish lira.
    Try,
    /// Mexican peso.
    Mxn,
}

impl Currency {
    /// All supported currencies, in catalog order.
    pub const ALL: [Currency; 5] = [
        Currency::Rub,
        Currency::Kzt,
        Currency::Azn,
        Currency::Try,
        Currency::Mxn,
    ];

    /// ISO 4217 code as it appears in descriptions.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Kzt => "KZT",
            Currency::Azn => "AZN",
            Currency::Try => "TRY",
            Currency::Mxn => "MXN",
        }
    }

    /// Look up a currency by its exact code. Unknown codes yield `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| format!("unsupported currency: {}", s))
    }
}

/// Outcome of parsing one description.
///
/// A result is either fully extracted or not extracted at all; there is no
/// partially filled success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseResult {
    /// All three terms were found.
    Extracted {
        /// Minimum deposit, e.g. `50000 RUB`.
        deposit: String,
        /// Bet segment, e.g. `50 000 RUB`.
        bet: String,
        /// Free-spin grant, e.g. `100 FS (х40)`.
        free_spin: String,
    },
    /// At least one term was missing; keeps the normalized text for review.
    Unparsed {
        /// Normalized description.
        original: String,
    },
}

impl ParseResult {
    pub fn is_extracted(&self) -> bool {
        matches!(self, ParseResult::Extracted { .. })
    }

    pub fn deposit(&self) -> Option<&str> {
        match self {
            ParseResult::Extracted { deposit, .. } => Some(deposit),
            ParseResult::Unparsed { .. } => None,
        }
    }

    pub fn bet(&self) -> Option<&str> {
        match self {
            ParseResult::Extracted { bet, .. } => Some(bet),
            ParseResult::Unparsed { .. } => None,
        }
    }

    pub fn free_spin(&self) -> Option<&str> {
        match self {
            ParseResult::Extracted { free_spin, .. } => Some(free_spin),
            ParseResult::Unparsed { .. } => None,
        }
    }

    /// Original text kept for manual follow-up.
    pub fn original(&self) -> Option<&str> {
        match self {
            ParseResult::Extracted { .. } => None,
            ParseResult::Unparsed { original } => Some(original),
        }
    }
}

/// One input row of a bonus table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusRow {
    /// Opaque user identifier, passed through unchanged.
    pub user_id: String,

    /// Currency code as given in the table (not validated).
    pub currency: String,

    /// Free-text bonus description.
    pub description: String,
}

/// One output row: the input identifiers plus the parse outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedRow {
    pub user_id: String,
    pub currency: String,
    #[serde(flatten)]
    pub result: ParseResult,
}
