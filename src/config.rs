/// Special characters blanked during unigram reduction.
///
/// Narrower than full punctuation stripping on purpose: reduction only
/// splits on the separators that show up inside part descriptions.
pub const DEFAULT_SPECIALS: &str = ",.-";

/// Placeholder token substituted for the first detected timestamp.
pub const TIMESTAMP_PLACEHOLDER: &str = "<timestamp>";

/// Stage toggles for the normalization pipeline.
///
/// Each stage can be disabled independently, but enabled stages always run
/// in one fixed order: lowercase -> stopword removal -> punctuation
/// blanking -> timestamp replacement -> digit-token removal -> whitespace
/// collapse. The order is part of the contract; reordering stages changes
/// the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizeConfig {
    /// Case-fold the whole string.
    pub lowercase: bool,
    /// Drop whitespace-delimited tokens found in the stopword set.
    /// Membership is case-sensitive, so this normally runs after lowering.
    pub strip_stopwords: bool,
    /// Replace every ASCII punctuation character with a single space.
    pub strip_punctuation: bool,
    /// Replace detected timestamps with [`TIMESTAMP_PLACEHOLDER`].
    pub replace_timestamps: bool,
    /// Remove every whitespace-delimited token containing a digit.
    pub strip_digit_tokens: bool,
    /// Collapse whitespace runs to single spaces and trim.
    pub collapse_whitespace: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            strip_stopwords: true,
            strip_punctuation: true,
            // Timestamp detection may sit behind a heavy capability, so it
            // is opt-in, matching the historical default.
            replace_timestamps: false,
            strip_digit_tokens: true,
            collapse_whitespace: true,
        }
    }
}

impl NormalizeConfig {
    /// Config with every stage disabled; useful as a base when testing a
    /// single stage in isolation.
    pub fn none() -> Self {
        Self {
            lowercase: false,
            strip_stopwords: false,
            strip_punctuation: false,
            replace_timestamps: false,
            strip_digit_tokens: false,
            collapse_whitespace: false,
        }
    }
}
