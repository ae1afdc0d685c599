//! All-distinct-pairs label similarity matrix with file caching.

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::LabelEntry;
use crate::errors::OverlapError;
use crate::scorer::StringSimilarityScorer;

/// Scored pairs logged between progress messages during matrix generation.
const PROGRESS_INTERVAL: usize = 10_000;

/// One row of the label similarity matrix.
///
/// Invariant: `label_1 < label_2` under plain integer ordering, so the
/// matrix holds no self-pairs and exactly one orientation of each unordered
/// pair.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairRow {
    /// Smaller label of the pair.
    pub label_1: u64,
    /// Larger label of the pair.
    pub label_2: u64,
    /// Display title of `label_1`.
    pub label_title_1: String,
    /// Display title of `label_2`.
    pub label_title_2: String,
    /// Scorer output for the two titles.
    pub titles_similarity_score: f64,
}

/// Build (or load) the similarity matrix for every distinct unordered label
/// pair in `catalog`.
///
/// When `cache_path` already exists the stored table is returned verbatim:
/// the cache is trusted and never invalidated against the catalog, a known
/// staleness risk carried over deliberately. Delete the file to force a
/// rebuild. Concurrent builders targeting the same path race (first existing
/// file wins on read, last writer wins on write).
///
/// Otherwise every pair `(a, b)` with `a.label < b.label` is generated from
/// the catalog's row ordering, scored through `scorer`, persisted to
/// `cache_path`, and returned. Scoring dominates the cost at O(k^2) scorer
/// invocations; pairs are scored in parallel and progress is reported
/// through `tracing`.
pub fn build_pair_matrix(
    catalog: &[LabelEntry],
    cache_path: &Path,
    scorer: &dyn StringSimilarityScorer,
) -> Result<Vec<PairRow>, OverlapError> {
    if cache_path.exists() {
        info!(path = %cache_path.display(), "label similarity cache found");
        return read_matrix(cache_path);
    }
    info!(
        labels = catalog.len(),
        path = %cache_path.display(),
        "label similarity cache not found, generating"
    );

    let mut pairs: Vec<(&LabelEntry, &LabelEntry)> = Vec::new();
    for first in catalog {
        for second in catalog {
            if first.label < second.label {
                pairs.push((first, second));
            }
        }
    }

    let total = pairs.len();
    let scored = AtomicUsize::new(0);
    let rows: Vec<PairRow> = pairs
        .par_iter()
        .map(|(first, second)| {
            let score = scorer.score(&first.title, &second.title);
            let done = scored.fetch_add(1, Ordering::Relaxed) + 1;
            if done % PROGRESS_INTERVAL == 0 {
                debug!(done, total, "scored label pairs");
            }
            PairRow {
                label_1: first.label,
                label_2: second.label,
                label_title_1: first.title.clone(),
                label_title_2: second.title.clone(),
                titles_similarity_score: score,
            }
        })
        .collect();

    write_matrix(cache_path, &rows)?;
    info!(rows = rows.len(), path = %cache_path.display(), "label similarity matrix generated");
    Ok(rows)
}

/// Read a previously persisted matrix.
pub fn read_matrix(path: &Path) -> Result<Vec<PairRow>, OverlapError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Persist a matrix as CSV with one row per pair.
pub fn write_matrix(path: &Path, rows: &[PairRow]) -> Result<(), OverlapError> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstScorer;

    impl StringSimilarityScorer for ConstScorer {
        fn score(&self, a: &str, b: &str) -> f64 {
            if a == b {
                100.0
            } else {
                50.0
            }
        }
    }

    fn entry(label: u64, title: &str) -> LabelEntry {
        LabelEntry {
            label,
            title: title.to_string(),
        }
    }

    #[test]
    fn emits_each_unordered_pair_once_smaller_label_first() {
        let dir = tempfile::TempDir::new().unwrap();
        let cache = dir.path().join("matrix.csv");
        let catalog = vec![entry(1, "A"), entry(2, "B"), entry(3, "A")];

        let rows = build_pair_matrix(&catalog, &cache, &ConstScorer).unwrap();

        assert_eq!(
            rows,
            vec![
                PairRow {
                    label_1: 1,
                    label_2: 2,
                    label_title_1: "A".into(),
                    label_title_2: "B".into(),
                    titles_similarity_score: 50.0,
                },
                PairRow {
                    label_1: 1,
                    label_2: 3,
                    label_title_1: "A".into(),
                    label_title_2: "A".into(),
                    titles_similarity_score: 100.0,
                },
                PairRow {
                    label_1: 2,
                    label_2: 3,
                    label_title_1: "B".into(),
                    label_title_2: "A".into(),
                    titles_similarity_score: 50.0,
                },
            ]
        );
    }

    #[test]
    fn never_emits_self_pairs_or_mirrored_duplicates() {
        let dir = tempfile::TempDir::new().unwrap();
        let cache = dir.path().join("matrix.csv");
        let catalog: Vec<LabelEntry> = (1..=6).map(|n| entry(n, "title")).collect();

        let rows = build_pair_matrix(&catalog, &cache, &ConstScorer).unwrap();

        // C(6, 2) distinct unordered pairs.
        assert_eq!(rows.len(), 15);
        for row in &rows {
            assert!(row.label_1 < row.label_2);
        }
        let mut keys: Vec<(u64, u64)> = rows.iter().map(|r| (r.label_1, r.label_2)).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 15);
    }

    #[test]
    fn duplicate_labels_cannot_pair_with_themselves() {
        let dir = tempfile::TempDir::new().unwrap();
        let cache = dir.path().join("matrix.csv");
        let catalog = vec![entry(7, "A"), entry(7, "B")];

        let rows = build_pair_matrix(&catalog, &cache, &ConstScorer).unwrap();
        assert!(rows.is_empty());
    }
}
