//! Timestamp detection behind a capability trait, with a regex-based
//! default implementation validated through chrono.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

/// One detected timestamp span.
#[derive(Clone, Debug, PartialEq)]
pub struct TimestampMatch {
    /// Literal matched substring, exactly as it appears in the input.
    pub text: String,
    /// Parsed value when the span maps onto a calendar date; opaque to the
    /// normalizer, which only consumes `text`.
    pub value: Option<NaiveDateTime>,
}

/// Capability locating date/time substrings in free text.
///
/// Implementations return matches in left-to-right order of discovery and an
/// empty vector when nothing matches. Remote-backed implementations are
/// expected to enforce their own deadlines.
pub trait TimestampFinder: Send + Sync {
    /// All timestamp spans in `text`, left to right.
    fn find(&self, text: &str) -> Vec<TimestampMatch>;
}

/// Finder that never matches; used when timestamp replacement is disabled
/// or a detection backend is unavailable.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTimestamps;

impl TimestampFinder for NoTimestamps {
    fn find(&self, _text: &str) -> Vec<TimestampMatch> {
        Vec::new()
    }
}

/// Regex-based finder covering the timestamp shapes that occur in line-item
/// descriptions: ISO dates with optional times, slashed dates, and bare
/// clock times.
///
/// Candidate spans are validated with chrono before they count as matches,
/// so `2021-13-45` is not a timestamp.
#[derive(Clone, Debug)]
pub struct RegexTimestampFinder {
    patterns: Vec<(Regex, SpanKind)>,
}

#[derive(Clone, Copy, Debug)]
enum SpanKind {
    IsoDateTime,
    SlashedDate,
    ClockTime,
}

impl RegexTimestampFinder {
    /// Build the finder. Patterns are hard-coded and always compile.
    pub fn new() -> Self {
        let patterns = vec![
            (
                Regex::new(r"\d{4}-\d{2}-\d{2}(?: \d{2}:\d{2}(?::\d{2})?)?")
                    .expect("hard-coded pattern compiles"),
                SpanKind::IsoDateTime,
            ),
            (
                Regex::new(r"\d{1,2}/\d{1,2}/\d{4}").expect("hard-coded pattern compiles"),
                SpanKind::SlashedDate,
            ),
            (
                Regex::new(r"\d{1,2}:\d{2}(?::\d{2})?").expect("hard-coded pattern compiles"),
                SpanKind::ClockTime,
            ),
        ];
        Self { patterns }
    }
}

impl Default for RegexTimestampFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl TimestampFinder for RegexTimestampFinder {
    fn find(&self, text: &str) -> Vec<TimestampMatch> {
        let mut candidates: Vec<(usize, usize, TimestampMatch)> = Vec::new();
        for (pattern, kind) in &self.patterns {
            for found in pattern.find_iter(text) {
                if let Some(parsed) = validate(found.as_str(), *kind) {
                    candidates.push((
                        found.start(),
                        found.end(),
                        TimestampMatch {
                            text: found.as_str().to_string(),
                            value: parsed,
                        },
                    ));
                }
            }
        }

        // Left-to-right order of discovery, earlier/longer spans win when
        // patterns overlap (a clock time inside an ISO datetime).
        candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
        let mut matches = Vec::new();
        let mut covered_until = 0;
        for (start, end, found) in candidates {
            if start < covered_until {
                continue;
            }
            covered_until = end;
            matches.push(found);
        }
        matches
    }
}

fn validate(span: &str, kind: SpanKind) -> Option<Option<NaiveDateTime>> {
    match kind {
        SpanKind::IsoDateTime => {
            for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
                if let Ok(parsed) = NaiveDateTime::parse_from_str(span, format) {
                    return Some(Some(parsed));
                }
            }
            NaiveDate::parse_from_str(span, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_hms_opt(0, 0, 0))
        }
        SpanKind::SlashedDate => {
            // Day-first and month-first layouts both occur in the data;
            // accept the span when either interpretation is a real date.
            for format in ["%m/%d/%Y", "%d/%m/%Y"] {
                if let Ok(date) = NaiveDate::parse_from_str(span, format) {
                    return Some(date.and_hms_opt(0, 0, 0));
                }
            }
            None
        }
        SpanKind::ClockTime => {
            for format in ["%H:%M:%S", "%H:%M"] {
                if NaiveTime::parse_from_str(span, format).is_ok() {
                    return Some(None);
                }
            }
            None
        }
    }
}
