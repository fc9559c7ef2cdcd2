//! Allow-list snapshot.
//!
//! An [`AllowList`] is an owned set of canonical keys built from raw,
//! human-authored column names. It is built once per request from whatever
//! the store held at that moment; later store writes never reach it.

mod merge;

use std::collections::HashSet;

use crate::normalize::{normalize_with, CanonicalKey, NormalizePolicy};

pub use merge::unseen_names;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowList {
    keys: HashSet<CanonicalKey>,
    policy: NormalizePolicy,
}

impl AllowList {
    /// Build with the lenient policy.
    pub fn build<I, S>(raw_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(raw_names, NormalizePolicy::Lenient)
    }

    /// Normalize every name under `policy`; duplicates collapse and names
    /// with an empty key are skipped.
    pub fn build_with<I, S>(raw_names: I, policy: NormalizePolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys = raw_names
            .into_iter()
            .map(|name| normalize_with(name.as_ref(), policy))
            .filter(|key| !key.is_empty())
            .collect();
        Self { keys, policy }
    }

    pub fn contains(&self, key: &CanonicalKey) -> bool {
        self.keys.contains(key)
    }

    /// Normalize `label` under this list's policy and test membership.
    pub fn matches(&self, label: &str) -> bool {
        self.contains(&self.key_for(label))
    }

    pub fn key_for(&self, label: &str) -> CanonicalKey {
        normalize_with(label, self.policy)
    }

    pub fn policy(&self) -> NormalizePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    #[test]
    fn duplicates_collapse_by_canonical_key() {
        let list = AllowList::build(["Product", "PRODUCT", " product ", "Qty", "QTY."]);
        assert_eq!(list.len(), 2);
        assert!(list.contains(&normalize("product")));
        assert!(list.contains(&normalize("qty")));
    }

    #[test]
    fn empty_keys_are_not_stored() {
        let list = AllowList::build(["---", "", "Qty"]);
        assert_eq!(list.len(), 1);
        assert!(!list.matches(""));
        assert!(!list.matches("   "));
    }

    #[test]
    fn matches_tolerates_surface_variants() {
        let list = AllowList::build(["Gr. WT"]);
        assert!(list.matches("GR-WT"));
        assert!(list.matches("gr wt"));
        assert!(list.matches("gr_wt "));
        assert!(!list.matches("grwt"));
    }

    #[test]
    fn strict_list_uses_strict_keys() {
        let list = AllowList::build_with(["Qty"], NormalizePolicy::Strict);
        assert_eq!(list.policy(), NormalizePolicy::Strict);
        assert!(list.matches("QTY"));
        assert!(!list.matches("#Qty"));

        let lenient = AllowList::build(["Qty"]);
        assert!(lenient.matches("#Qty"));
    }

    #[test]
    fn empty_list_matches_nothing() {
        let list = AllowList::build(Vec::<String>::new());
        assert!(list.is_empty());
        assert!(!list.matches("anything"));
    }
}
