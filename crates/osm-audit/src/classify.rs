use osm_model::Vocabulary;

use crate::pattern::ExtractPattern;

/// Classify one value.
///
/// Returns `Some((token, value))` when the value needs review, `None` when it
/// has no token or its token is already in the vocabulary.
pub fn classify<'v>(
    value: &'v str,
    pattern: ExtractPattern,
    vocabulary: &Vocabulary,
) -> Option<(&'v str, &'v str)> {
    let token = pattern.extract(value)?;
    if vocabulary.contains(token.text) {
        return None;
    }
    Some((token.text, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conforming_state_is_dropped() {
        let vocabulary = Vocabulary::new(["NSW"]);
        assert_eq!(classify("NSW", ExtractPattern::TrailingWord, &vocabulary), None);
    }

    #[test]
    fn abbreviation_needs_review() {
        let vocabulary = Vocabulary::new(["Street", "Road"]);
        assert_eq!(
            classify("Baldwin Rd.", ExtractPattern::TrailingWord, &vocabulary),
            Some(("Rd.", "Baldwin Rd."))
        );
    }

    #[test]
    fn empty_vocabulary_records_every_match() {
        assert_eq!(
            classify("2000", ExtractPattern::PostalCode, &Vocabulary::empty()),
            Some(("2000", "2000"))
        );
    }

    #[test]
    fn unmatched_value_is_not_an_error() {
        assert_eq!(
            classify("Sydney", ExtractPattern::PostalCode, &Vocabulary::empty()),
            None
        );
    }
}
