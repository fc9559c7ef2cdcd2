//! Typed failures of a single detect-and-filter call.

use thiserror::Error;

/// Why a grid could not be reduced to a filtered table.
///
/// Neither variant is retried: the caller reports it once and abandons that
/// request. No partial table is ever produced alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SiftError {
    /// The grid has no rows, so there is nothing to scan for a header.
    #[error("input grid is empty; no header row to detect")]
    EmptyInput,
    /// A header row was chosen but none of its labels are in the allow-list.
    #[error("no columns in header row {header_row} match the allow-list")]
    NoMatchingColumns { header_row: usize },
}
