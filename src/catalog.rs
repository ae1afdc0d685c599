//! Label catalog entries and the code -> title reference lookup.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::OverlapError;

/// Sentinel title returned when no reference table knows a code.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// One labeled group in the classification catalog.
///
/// The label is an opaque numeric identifier (a UNSPSC code in practice)
/// ordered by plain integer ordering. Titles may repeat across labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEntry {
    /// Opaque numeric label.
    pub label: u64,
    /// Human-readable display title.
    pub title: String,
}

/// Code -> title lookup across one or more reference tables.
///
/// Tables are consulted in registration order and the last table holding a
/// code wins, mirroring how revised UNSPSC reference sheets override older
/// ones.
#[derive(Clone, Debug, Default)]
pub struct TitleIndex {
    tables: Vec<IndexMap<u64, String>>,
}

#[derive(Deserialize)]
struct TitleRow {
    #[serde(rename = "Code")]
    code: u64,
    #[serde(rename = "Title")]
    title: String,
}

impl TitleIndex {
    /// Empty index with no reference tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an in-memory reference table.
    pub fn push_table(&mut self, table: IndexMap<u64, String>) {
        self.tables.push(table);
    }

    /// Register a reference table from a CSV file with `Code,Title` columns.
    pub fn load_csv(&mut self, path: &Path) -> Result<(), OverlapError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut table = IndexMap::new();
        for row in reader.deserialize::<TitleRow>() {
            let row = row.map_err(|err| OverlapError::ReferenceTable {
                path: path.display().to_string(),
                reason: err.to_string(),
            })?;
            table.insert(row.code, row.title);
        }
        debug!(codes = table.len(), path = %path.display(), "reference table loaded");
        self.push_table(table);
        Ok(())
    }

    /// Look up the display title for `code`, returning [`UNKNOWN_TITLE`]
    /// when no table contains it. Never an error.
    pub fn title_for(&self, code: u64) -> String {
        let mut title = UNKNOWN_TITLE.to_string();
        for table in &self.tables {
            if let Some(found) = table.get(&code) {
                title = found.clone();
            }
        }
        title
    }
}
