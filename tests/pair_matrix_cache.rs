use std::fs;

use lid_overlap::{build_pair_matrix, LabelEntry, StringSimilarityScorer, TokenSortScorer};

struct ConstScorer(f64);

impl StringSimilarityScorer for ConstScorer {
    fn score(&self, _a: &str, _b: &str) -> f64 {
        self.0
    }
}

fn catalog() -> Vec<LabelEntry> {
    vec![
        LabelEntry {
            label: 25202100,
            title: "Flight instrumentation".to_string(),
        },
        LabelEntry {
            label: 30111700,
            title: "Concrete and mortars".to_string(),
        },
        LabelEntry {
            label: 30111800,
            title: "Concrete reinforcement".to_string(),
        },
    ]
}

#[test]
fn generated_matrix_round_trips_through_cache() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = dir.path().join("unspsc_title_similarity.csv");

    let generated = build_pair_matrix(&catalog(), &cache, &TokenSortScorer).unwrap();
    assert!(cache.exists());
    assert_eq!(generated.len(), 3);

    let reloaded = build_pair_matrix(&catalog(), &cache, &TokenSortScorer).unwrap();
    assert_eq!(generated, reloaded);
}

#[test]
fn existing_cache_is_trusted_over_catalog_and_scorer() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = dir.path().join("matrix.csv");

    let first = build_pair_matrix(&catalog(), &cache, &ConstScorer(42.0)).unwrap();

    // A different scorer and a shrunken catalog are both ignored once the
    // cache file exists; staleness is a documented property of the cache.
    let stale = build_pair_matrix(&catalog()[..1], &cache, &ConstScorer(7.0)).unwrap();
    assert_eq!(first, stale);
    assert!(stale.iter().all(|row| row.titles_similarity_score == 42.0));
}

#[test]
fn persisted_matrix_has_the_expected_columns() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = dir.path().join("matrix.csv");

    build_pair_matrix(&catalog(), &cache, &ConstScorer(1.0)).unwrap();

    let contents = fs::read_to_string(&cache).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(
        header,
        "label_1,label_2,label_title_1,label_title_2,titles_similarity_score"
    );
    // Header plus one row per distinct unordered pair.
    assert_eq!(contents.lines().count(), 4);
}

#[test]
fn corrupt_cache_propagates_as_an_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let cache = dir.path().join("matrix.csv");
    fs::write(
        &cache,
        "label_1,label_2,label_title_1,label_title_2,titles_similarity_score\nnot-a-number,2,A,B,50\n",
    )
    .unwrap();

    let err = build_pair_matrix(&catalog(), &cache, &ConstScorer(1.0));
    assert!(err.is_err());
}
