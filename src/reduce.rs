//! Unigram reduction: collapse a string to its unique whitespace-delimited
//! tokens in first-occurrence order.

use std::collections::HashSet;

use crate::config::DEFAULT_SPECIALS;

/// Reduce a string to its unique unigrams, preserving first-occurrence order.
///
/// Every character in `specials` is blanked to a single space first (this is
/// deliberately narrower than full punctuation stripping), then the string is
/// split on whitespace and later duplicates of a token are dropped. The
/// survivors are rejoined with single spaces.
///
/// `None` models a missing source value and reduces to the empty string
/// rather than an error. The operation is deterministic, case-sensitive, and
/// idempotent.
pub fn reduce_unigrams(text: Option<&str>, specials: &str) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let blanked: String = text
        .chars()
        .map(|ch| if specials.contains(ch) { ' ' } else { ch })
        .collect();

    let mut seen = HashSet::new();
    let mut kept = Vec::new();
    for token in blanked.split_whitespace() {
        if seen.insert(token) {
            kept.push(token);
        }
    }
    kept.join(" ")
}

/// [`reduce_unigrams`] with the stock separator set [`DEFAULT_SPECIALS`].
pub fn reduce_unigrams_default(text: Option<&str>) -> String {
    reduce_unigrams(text, DEFAULT_SPECIALS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blanks_specials_and_drops_duplicates() {
        assert_eq!(
            reduce_unigrams_default(Some("MATL, RAWPACKAGING-BAG")),
            "MATL RAWPACKAGING BAG"
        );
        assert_eq!(
            reduce_unigrams_default(Some("bag bag BAG bag")),
            "bag BAG"
        );
    }

    #[test]
    fn preserves_first_occurrence_order() {
        assert_eq!(
            reduce_unigrams_default(Some("c.a,b c a")),
            "c a b"
        );
    }

    #[test]
    fn missing_value_reduces_to_empty() {
        assert_eq!(reduce_unigrams_default(None), "");
        assert_eq!(reduce_unigrams_default(Some("")), "");
        assert_eq!(reduce_unigrams_default(Some(",.-")), "");
    }

    #[test]
    fn reduction_is_idempotent() {
        let once = reduce_unigrams_default(Some("MATL RAWPACKAGING, OTHER, BAG, 80, HACKER HIGH S"));
        let twice = reduce_unigrams_default(Some(&once));
        assert_eq!(once, twice);
    }

    #[test]
    fn untouched_characters_pass_through() {
        // Only the configured specials are blanked; other punctuation stays.
        assert_eq!(
            reduce_unigrams(Some("a/b a/b c!"), DEFAULT_SPECIALS),
            "a/b c!"
        );
    }
}
