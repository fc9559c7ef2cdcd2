//! Header row detection.
//!
//! The header of an exported sheet is rarely row 0: report titles, dates and
//! blank padding often sit above it. Each row in a bounded prefix is scored by
//! how many of its cells are allow-listed, and the first row with the highest
//! score wins.

use crate::allow_list::AllowList;
use crate::error::SiftError;
use crate::grid::{HeaderCandidate, RawGrid};

/// Number of leading rows considered for the header.
pub const DEFAULT_SCAN_LIMIT: usize = 300;

/// Count of cells in `row` whose canonical key is in `allow_list`.
pub fn score_row(row: &[String], allow_list: &AllowList) -> usize {
    row.iter().filter(|cell| allow_list.matches(cell)).count()
}

/// Detect the header within the first [`DEFAULT_SCAN_LIMIT`] rows.
pub fn detect_header(grid: &RawGrid, allow_list: &AllowList) -> Result<HeaderCandidate, SiftError> {
    detect_header_within(grid, allow_list, DEFAULT_SCAN_LIMIT)
}

/// Detect the header within the first `scan_limit` rows (at least one row is
/// always scanned). Ties keep the earliest row; a score of zero is still a
/// valid answer.
pub fn detect_header_within(
    grid: &RawGrid,
    allow_list: &AllowList,
    scan_limit: usize,
) -> Result<HeaderCandidate, SiftError> {
    let bound = grid.len().min(scan_limit.max(1));

    let mut best: Option<(usize, usize)> = None;
    for (index, row) in grid.rows()[..bound].iter().enumerate() {
        let score = score_row(row, allow_list);
        tracing::trace!(row = index, score, "scored header candidate");
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(SiftError::EmptyInput)?;
    let labels = grid.row(index).map(<[String]>::to_vec).unwrap_or_default();
    tracing::debug!(row = index, score, scanned = bound, "header row selected");
    Ok(HeaderCandidate {
        index,
        labels,
        score,
    })
}
