//! colsift core: find the header row of a raw spreadsheet grid and keep only
//! the allow-listed columns.
//!
//! The engine (`normalize`, `allow_list`, `detect`, `filter`, `sift`) is
//! synchronous and pure. `reader`, `writer` and `store` are the I/O around it.

pub mod config;
pub mod logging;

pub mod allow_list;
pub mod detect;
pub mod error;
pub mod filter;
pub mod grid;
pub mod normalize;
pub mod sift;

pub mod reader;
pub mod store;
pub mod writer;

pub use allow_list::AllowList;
pub use error::SiftError;
pub use grid::{FilteredTable, HeaderCandidate, RawGrid};
pub use normalize::{normalize, normalize_with, CanonicalKey, NormalizePolicy};
pub use sift::{sift, SiftOptions, SiftOutcome};
