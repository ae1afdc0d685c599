//! Pluggable string-similarity backends for pair-matrix scoring.

/// Capability scoring the similarity of two strings.
///
/// Backends are swappable: an edit-distance ratio and a semantic-embedding
/// similarity both fit behind this seam, and the pair-matrix builder is
/// agnostic to which one is plugged in. Remote or model-backed
/// implementations are expected to enforce their own deadlines.
pub trait StringSimilarityScorer: Send + Sync {
    /// Similarity score for `(a, b)`.
    fn score(&self, a: &str, b: &str) -> f64;
}

/// Token-sort fuzzy ratio on a 0-100 scale, rounded to the nearest integer.
///
/// Both inputs are tokenized on whitespace, the tokens sorted and rejoined,
/// and the resulting strings compared with an indel ratio, so word order
/// does not affect the score.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokenSortScorer;

impl StringSimilarityScorer for TokenSortScorer {
    fn score(&self, a: &str, b: &str) -> f64 {
        let a = token_sorted(a);
        let b = token_sorted(b);
        (rapidfuzz::fuzz::ratio(a.chars(), b.chars()) * 100.0).round()
    }
}

fn token_sorted(text: &str) -> String {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}
