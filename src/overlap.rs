//! Set-based unigram overlap scoring between two pre-processed strings.

use std::collections::HashSet;

/// Symmetric unigram-set similarity between two strings.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlapScore {
    /// Shared-token count divided by the mean set size,
    /// `absolute / ((|a| + |b|) / 2)`. Defined as `0.0` when both inputs
    /// reduce to empty token sets.
    pub average: f64,
    /// Number of tokens present in both inputs.
    pub absolute: usize,
    /// Shared tokens, comma-joined in sorted order.
    ///
    /// Sorting fixes a canonical ordering so results are reproducible across
    /// runs; set-iteration order would not be.
    pub shared: String,
}

/// Score the unigram overlap between two strings.
///
/// Each input is trimmed and split on single spaces into a case-sensitive
/// token set; callers normalize beforehand when case-insensitive comparison
/// is wanted. An input that is empty after trimming yields an empty set, so
/// two empty inputs score `average == 0.0` rather than dividing by zero.
pub fn unigrams_in_common(text_a: &str, text_b: &str) -> OverlapScore {
    let set_a = unigram_set(text_a);
    let set_b = unigram_set(text_b);

    let mut shared: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    shared.sort_unstable();

    let absolute = shared.len();
    let mean_size = (set_a.len() + set_b.len()) as f64 / 2.0;
    let average = if mean_size == 0.0 {
        0.0
    } else {
        absolute as f64 / mean_size
    };

    OverlapScore {
        average,
        absolute,
        shared: shared.join(","),
    }
}

fn unigram_set(text: &str) -> HashSet<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return HashSet::new();
    }
    trimmed.split(' ').collect()
}
