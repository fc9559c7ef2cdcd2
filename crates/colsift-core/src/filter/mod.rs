//! Column projection onto the allow-list.

use crate::allow_list::AllowList;
use crate::error::SiftError;
use crate::grid::{FilteredTable, RawGrid};

/// Positions of header labels that are allow-listed, ascending.
///
/// Duplicate labels are kept independently: two "QTY" columns yield two
/// positions.
pub fn kept_positions(header: &[String], allow_list: &AllowList) -> Vec<usize> {
    header
        .iter()
        .enumerate()
        .filter(|(_, label)| allow_list.matches(label))
        .map(|(j, _)| j)
        .collect()
}

/// Project the rows after `header_row` onto the allow-listed columns.
///
/// Body rows behave as if padded with empty cells or truncated to the header
/// width: every kept position is below that width, so a short row yields ""
/// for missing cells and extra trailing cells are never read.
pub fn filter_columns(
    grid: &RawGrid,
    header_row: usize,
    allow_list: &AllowList,
) -> Result<FilteredTable, SiftError> {
    if grid.is_empty() {
        return Err(SiftError::EmptyInput);
    }
    // A row index past the end has no labels, so nothing can match.
    let header = grid.row(header_row).unwrap_or(&[]);
    let width = header.len();
    let keep = kept_positions(header, allow_list);
    if keep.is_empty() {
        return Err(SiftError::NoMatchingColumns { header_row });
    }

    let labels = keep.iter().map(|&j| header[j].clone()).collect();
    let rows = grid.rows()[header_row + 1..]
        .iter()
        .map(|row| {
            keep.iter()
                .map(|&j| row.get(j).cloned().unwrap_or_default())
                .collect()
        })
        .collect();

    let table = FilteredTable { labels, rows };
    tracing::debug!(
        header_row,
        width,
        kept = table.width(),
        rows = table.row_count(),
        "filtered columns"
    );
    Ok(table)
}
