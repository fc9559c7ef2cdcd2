//! CLI command handlers, one file per command.

mod allow;
mod detect;
mod normalize;
mod sift;

pub use allow::{run_allow_add, run_allow_list, run_allow_remove, run_allow_seed};
pub use detect::run_detect;
pub use normalize::run_normalize;
pub use sift::run_sift;
