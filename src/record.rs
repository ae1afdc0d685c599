//! Composite LID records with derived normalized and reduced views.

use rayon::prelude::*;

use crate::normalize::Normalizer;
use crate::reduce::reduce_unigrams_default;

/// A prepared line-item description.
///
/// The raw text is composed by joining the source fields with single spaces,
/// missing fields contributing empty strings. The derived views are computed
/// once at construction and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Source fields joined with single spaces.
    pub concatenated: String,
    /// Output of the normalization pipeline over `concatenated`.
    pub normalized: String,
    /// Unique unigrams of `concatenated` in first-occurrence order.
    pub reduced: String,
}

/// Join source description fields with single spaces, substituting the empty
/// string for missing fields. Never fails on malformed input.
pub fn compose_lid(fields: &[Option<&str>]) -> String {
    fields
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
}

impl Record {
    /// Compose the raw LID from `fields` and derive both views.
    pub fn prepare(fields: &[Option<&str>], normalizer: &Normalizer) -> Self {
        let concatenated = compose_lid(fields);
        let reduced = reduce_unigrams_default(Some(&concatenated));
        let normalized = normalizer.normalize(&concatenated);
        Self {
            concatenated,
            normalized,
            reduced,
        }
    }

    /// Prepare many records in parallel. Rows are independent, so the work
    /// fans out across the rayon pool and results come back in input order.
    pub fn prepare_batch(rows: &[&[Option<&str>]], normalizer: &Normalizer) -> Vec<Self> {
        rows.par_iter()
            .map(|fields| Self::prepare(fields, normalizer))
            .collect()
    }
}
