//! Mapping containers shared by the candidate finder, the solver and the
//! matcher.
//!
//! Both containers iterate in sorted key order, which keeps every walk over
//! them deterministic for a given input.

use std::collections::{BTreeMap, BTreeSet};

/// A (partial or complete) mapping from sub node name to host node name.
pub type NodeMapping = BTreeMap<String, String>;

/// Candidate sets: for each sub node name, the host node names it could
/// still map to.
pub type CandidateTable = BTreeMap<String, BTreeSet<String>>;

/// Returns true if two keys of `m` map to the same host node.
pub(crate) fn has_duplicate_target(m: &NodeMapping) -> bool {
    let mut seen = BTreeSet::new();
    m.values().any(|target| !seen.insert(target.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_duplicate_targets() {
        let mut m = NodeMapping::new();
        m.insert("A".to_string(), "1".to_string());
        m.insert("B".to_string(), "2".to_string());
        assert!(!has_duplicate_target(&m));
        m.insert("C".to_string(), "1".to_string());
        assert!(has_duplicate_target(&m));
    }
}
