//! Stopword set assembly: a base English list unioned with a custom domain
//! list and timezone abbreviations fetched from a remote JSON resource.

use std::collections::HashSet;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::errors::OverlapError;

/// Remote JSON resource listing timezone entries with `abbr` fields.
pub const TIMEZONES_JSON_URL: &str =
    "https://raw.githubusercontent.com/dmfilipenko/timezones.json/master/timezones.json";

/// Bound on the timezone fetch; the only unbounded-latency call in the
/// default providers.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Base English stopword list (NLTK-style).
const BASE_ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Domain terms that carry no signal in line-item descriptions.
const DOMAIN_TERMS: &[&str] = &[
    "ea", "pc", "pcs", "qty", "pkg", "pk", "assy", "misc", "ref", "item", "per", "w", "wo",
    "incl", "approx",
];

/// Capability supplying the stopword set used by the normalizer.
pub trait StopwordProvider {
    /// The full stopword set.
    fn words(&self) -> &HashSet<String>;
}

/// Default stopword provider: base English list, custom domain list, and
/// dynamically fetched timezone abbreviations.
///
/// Construction fails hard when the timezone resource cannot be fetched or
/// decoded; the word set is incomplete without it and the failure is
/// surfaced once, at startup, rather than per record.
#[derive(Clone, Debug)]
pub struct DomainStopwords {
    words: HashSet<String>,
}

#[derive(Deserialize)]
struct TimezoneEntry {
    abbr: String,
}

impl DomainStopwords {
    /// Assemble the word set, fetching timezone abbreviations from the
    /// canonical resource at [`TIMEZONES_JSON_URL`].
    pub fn load() -> Result<Self, OverlapError> {
        Self::load_from(TIMEZONES_JSON_URL)
    }

    /// Assemble the word set, fetching timezone abbreviations from `url`.
    pub fn load_from(url: &str) -> Result<Self, OverlapError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|err| OverlapError::StopwordSource(err.to_string()))?;
        let zones: Vec<TimezoneEntry> = client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|err| OverlapError::StopwordSource(err.to_string()))?
            .json()
            .map_err(|err| OverlapError::StopwordSource(err.to_string()))?;

        let abbreviations = zones.into_iter().map(|zone| zone.abbr.to_lowercase());
        let provider = Self::from_words(abbreviations);
        debug!(words = provider.words.len(), "stopword set assembled");
        Ok(provider)
    }

    /// Build a provider from the static lists plus `extra` words, without
    /// touching the network. Useful for tests and offline runs.
    pub fn from_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: HashSet<String> = BASE_ENGLISH
            .iter()
            .chain(DOMAIN_TERMS.iter())
            .map(|word| (*word).to_string())
            .collect();
        words.extend(extra.into_iter().map(Into::into));
        Self { words }
    }
}

impl StopwordProvider for DomainStopwords {
    fn words(&self) -> &HashSet<String> {
        &self.words
    }
}
