//! Detect-then-filter pipeline for one request.

use crate::allow_list::AllowList;
use crate::detect::{detect_header_within, DEFAULT_SCAN_LIMIT};
use crate::error::SiftError;
use crate::filter::filter_columns;
use crate::grid::{FilteredTable, HeaderCandidate, RawGrid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiftOptions {
    /// Leading rows considered when looking for the header.
    pub scan_limit: usize,
}

impl Default for SiftOptions {
    fn default() -> Self {
        Self {
            scan_limit: DEFAULT_SCAN_LIMIT,
        }
    }
}

/// Detected header plus the filtered body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiftOutcome {
    pub header: HeaderCandidate,
    pub table: FilteredTable,
}

/// Find the header row of `grid` and keep only its allow-listed columns.
///
/// `allow_list` is a snapshot owned by the caller; nothing here reads the
/// backing store.
#[tracing::instrument(level = "debug", skip_all, fields(rows = grid.len(), allowed = allow_list.len()))]
pub fn sift(
    grid: &RawGrid,
    allow_list: &AllowList,
    opts: &SiftOptions,
) -> Result<SiftOutcome, SiftError> {
    let header = detect_header_within(grid, allow_list, opts.scan_limit)?;
    let table = filter_columns(grid, header.index, allow_list)?;
    Ok(SiftOutcome { header, table })
}
