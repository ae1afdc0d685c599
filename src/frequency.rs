//! Two-bucket unigram frequency index with whole-file JSON persistence.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::OverlapError;

/// Occurrence counts for unigram-set entries.
///
/// Entries containing a comma are composite keys (multiple tokens that
/// co-occurred within one record) and land in `single_row`; bare tokens land
/// in `independent`. Counts only ever grow; there is no removal operation.
///
/// Persistence is load-then-rewrite-whole-file, which is not safe for
/// concurrent writers against the same path: first existing file wins on
/// read, last writer wins on write.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyTable {
    /// Comma-joined multi-token keys -> count.
    pub single_row: IndexMap<String, u64>,
    /// Single-token keys -> count.
    pub independent: IndexMap<String, u64>,
}

impl FrequencyTable {
    /// Empty table with both buckets present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count of each entry, inserting absent keys at 1.
    ///
    /// Final counts are independent of entry order, so batches may be
    /// accumulated in any order before persisting.
    pub fn update<I, S>(&mut self, entries: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for entry in entries {
            let key = entry.as_ref();
            let bucket = if key.contains(',') {
                &mut self.single_row
            } else {
                &mut self.independent
            };
            *bucket.entry(key.to_string()).or_insert(0) += 1;
        }
    }

    /// Read the table at `path`, or start empty when no file exists yet.
    /// A present-but-corrupt file is an error, not a silent reset.
    pub fn load(path: &Path) -> Result<Self, OverlapError> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    /// Rewrite the whole table to `path`.
    pub fn save(&self, path: &Path) -> Result<(), OverlapError> {
        let file = File::create(path)?;
        serde_json::to_writer(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Load the table backing `path`, apply `entries`, and rewrite the file.
    /// Returns the merged table.
    pub fn update_file<I, S>(path: &Path, entries: I) -> Result<Self, OverlapError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::load(path)?;
        table.update(entries);
        table.save(path)?;
        debug!(
            single_row = table.single_row.len(),
            independent = table.independent.len(),
            path = %path.display(),
            "frequency table rewritten"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_keys_route_to_single_row() {
        let mut table = FrequencyTable::new();
        table.update(["a,b,c", "x", "a,b,c"]);
        assert_eq!(table.single_row.get("a,b,c"), Some(&2));
        assert_eq!(table.independent.get("x"), Some(&1));
        assert_eq!(table.single_row.len(), 1);
        assert_eq!(table.independent.len(), 1);
    }

    #[test]
    fn counts_are_order_independent() {
        let mut forward = FrequencyTable::new();
        forward.update(["x", "a,b", "x", "y", "a,b"]);
        let mut backward = FrequencyTable::new();
        backward.update(["a,b", "y", "x", "a,b", "x"]);
        assert_eq!(forward.single_row.get("a,b"), backward.single_row.get("a,b"));
        assert_eq!(forward.independent.get("x"), backward.independent.get("x"));
        assert_eq!(forward.independent.get("y"), backward.independent.get("y"));
    }

    #[test]
    fn updates_are_purely_additive() {
        let mut table = FrequencyTable::new();
        table.update(["x"]);
        table.update(["x"]);
        table.update(Vec::<String>::new());
        assert_eq!(table.independent.get("x"), Some(&2));
    }

    #[test]
    fn json_shape_has_exactly_two_sections() {
        let mut table = FrequencyTable::new();
        table.update(["a,b", "x"]);
        let json = serde_json::to_value(&table).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["single_row"]["a,b"], 1);
        assert_eq!(json["independent"]["x"], 1);
    }
}
