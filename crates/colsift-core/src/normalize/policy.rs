use serde::{Deserialize, Serialize};

/// Which labels are allowed to produce a non-empty key.
///
/// `Lenient` normalizes every label. `Strict` maps any label whose first
/// character (after trimming) is not alphanumeric to the empty key, so
/// decorations like "* Notes" or "#" never match the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalizePolicy {
    #[default]
    Lenient,
    Strict,
}

pub(super) fn starts_alphanumeric(trimmed: &str) -> bool {
    trimmed.chars().next().is_some_and(char::is_alphanumeric)
}
