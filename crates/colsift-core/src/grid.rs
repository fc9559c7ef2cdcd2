//! Grid and table value types shared by the reader, core and writer.

use serde::Serialize;

/// Header-less grid of text cells, exactly as read from a file.
///
/// Rows may have different lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawGrid {
    rows: Vec<Vec<String>>,
}

impl RawGrid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Build a grid from string slices; mostly useful in tests.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        Self::new(
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

/// Row chosen as the header, with its allow-list score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCandidate {
    pub index: usize,
    pub labels: Vec<String>,
    pub score: usize,
}

/// Body of the grid projected onto the allow-listed columns.
///
/// `labels` keeps the raw header text (not the canonical key) and every row
/// holds exactly `labels.len()` values in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilteredTable {
    pub labels: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl FilteredTable {
    pub fn width(&self) -> usize {
        self.labels.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
