//! Label normalization.
//!
//! Header labels coming out of real spreadsheets disagree on case, spacing and
//! punctuation ("Gr. WT", "GR-WT", "gr_wt"). Every comparison in the crate goes
//! through [`normalize`] (or [`normalize_with`]) so that all of those collapse
//! onto the same [`CanonicalKey`].
//!
//! The steps, in order:
//! 1. NFKC compose
//! 2. U+00A0 (no-break space) becomes a regular space
//! 3. trim (whitespace plus the U+001C..U+001F separator controls)
//! 4. lowercase
//! 5. runs of whitespace, U+001C..U+001F, `.`, `_` and `-` become one space
//! 6. anything outside `[a-z0-9 ]` is dropped
//! 7. runs of spaces collapse to one, then trim again

mod policy;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

pub use policy::NormalizePolicy;

static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\x1c-\x1f._\-]+").unwrap());
static DISALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9 ]+").unwrap());
static SPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Comparison form of a column label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct CanonicalKey(String);

impl CanonicalKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators,
/// which some exporters leave in header cells.
fn is_label_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Normalize `raw` with the default (lenient) policy.
pub fn normalize(raw: &str) -> CanonicalKey {
    normalize_with(raw, NormalizePolicy::Lenient)
}

/// Normalize `raw` under an explicit policy. Never fails; the result may be empty.
pub fn normalize_with(raw: &str, policy: NormalizePolicy) -> CanonicalKey {
    let composed: String = raw.nfkc().collect();
    let spaced = composed.replace('\u{00a0}', " ");
    let trimmed = spaced.trim_matches(is_label_space);

    if policy == NormalizePolicy::Strict && !policy::starts_alphanumeric(trimmed) {
        return CanonicalKey::default();
    }

    let lowered = trimmed.to_lowercase();
    let separated = SEPARATOR_RUN.replace_all(&lowered, " ");
    let filtered = DISALLOWED.replace_all(&separated, "");
    let collapsed = SPACE_RUN.replace_all(&filtered, " ");
    CanonicalKey(collapsed.trim().to_string())
}
