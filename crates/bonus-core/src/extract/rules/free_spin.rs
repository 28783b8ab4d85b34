//! Free-spin grant extraction.

use super::patterns::FREE_SPIN;
use super::{ExtractionMatch, FieldExtractor};

/// Free-spin field extractor.
pub struct FreeSpinExtractor;

impl FreeSpinExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FreeSpinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for FreeSpinExtractor {
    type Output = ExtractionMatch<String>;

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        FREE_SPIN
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

/// Extract the first free-spin grant, e.g. `100 FS (х40)`.
pub fn extract_free_spin(text: &str) -> Option<String> {
    FreeSpinExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_free_spin() {
        let text = "получите 100 FS (х40) в подарок";
        assert_eq!(extract_free_spin(text), Some("100 FS (х40)".to_string()));
    }

    #[test]
    fn test_extract_free_spin_missing() {
        assert_eq!(extract_free_spin("получите 100 FS"), None);
        assert_eq!(extract_free_spin("100 FS (x40)"), None);
    }

    #[test]
    fn test_extract_all_free_spins() {
        let results = FreeSpinExtractor::new().extract_all("50 FS (х20) и ещё 25 FS (х10)");
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].value, "25 FS (х10)");
        assert_eq!(results[0].position, Some((0, 12)));
    }
}
