#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Label catalog entries and the code -> title reference lookup.
pub mod catalog;
/// Pipeline stage toggles and shared constants.
pub mod config;
/// Two-bucket unigram frequency index with JSON persistence.
pub mod frequency;
/// The ordered, toggleable normalization pipeline.
pub mod normalize;
/// Set-based unigram overlap scoring.
pub mod overlap;
/// Distinct-pair label similarity matrix with file caching.
pub mod pairs;
/// Composite LID records with derived views.
pub mod record;
/// Unigram reduction helpers.
pub mod reduce;
/// Pluggable string-similarity backends.
pub mod scorer;
/// Stopword set assembly.
pub mod stopwords;
/// Timestamp detection capability and default finder.
pub mod timestamps;

mod errors;

pub use catalog::{LabelEntry, TitleIndex, UNKNOWN_TITLE};
pub use config::{NormalizeConfig, DEFAULT_SPECIALS, TIMESTAMP_PLACEHOLDER};
pub use errors::OverlapError;
pub use frequency::FrequencyTable;
pub use normalize::Normalizer;
pub use overlap::{unigrams_in_common, OverlapScore};
pub use pairs::{build_pair_matrix, PairRow};
pub use record::{compose_lid, Record};
pub use reduce::{reduce_unigrams, reduce_unigrams_default};
pub use scorer::{StringSimilarityScorer, TokenSortScorer};
pub use stopwords::{DomainStopwords, StopwordProvider};
pub use timestamps::{NoTimestamps, RegexTimestampFinder, TimestampFinder, TimestampMatch};
