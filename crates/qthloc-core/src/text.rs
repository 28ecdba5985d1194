// crates/qthloc-core/src/text.rs

/// Fold a string for comparison: transliterate to ASCII, then lowercase.
///
/// ```
/// use qthloc_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Düsseldorf"), "dusseldorf");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert!(equals_folded("MÜNCHEN", "munchen"));
        assert!(equals_folded("Zürich", "zurich"));
        assert!(!equals_folded("Berlin", "Paris"));
    }
}
