use std::collections::HashSet;

use crate::normalize::normalize;

/// Raw names from `candidates` whose canonical key is neither in `existing`
/// nor already taken by an earlier candidate. Names that normalize to the
/// empty key are dropped. Input order is preserved.
///
/// Identity here always uses the lenient key, whatever policy later matches
/// against the list, so "#Qty" and "Qty" are one stored name.
pub fn unseen_names<S: AsRef<str>>(existing: &[String], candidates: &[S]) -> Vec<String> {
    let mut seen: HashSet<_> = existing.iter().map(|name| normalize(name)).collect();

    let mut out = Vec::new();
    for candidate in candidates {
        let raw = candidate.as_ref().trim();
        let key = normalize(raw);
        if key.is_empty() || !seen.insert(key) {
            continue;
        }
        out.push(raw.to_string());
    }
    out
}
