//! Mapping validation.
//!
//! [`is_valid`] is the single source of truth for "is this a match": both the
//! equation solver and the recursive matcher delegate their acceptance test
//! to it. Degree filters alone cannot rule out wrong edge structure between
//! nodes that happen to have matching in/out-degrees, so a complete mapping
//! is always validated before it is returned to a caller.

use tracing::trace;

use crate::graph::{Graph, NodeId};
use crate::mapping::{has_duplicate_target, NodeMapping};
use crate::subgraph::Subgraph;

/// Returns true if `m` is a valid mapping, from sub node name to host node
/// name, for an isomorphism of `sub` in `host` considering all nodes and
/// edges except predecessors of the entry and successors of the exit.
pub fn is_valid(host: &Graph, sub: &Subgraph, m: &NodeMapping) -> bool {
    if m.len() != sub.graph().node_count() {
        return false;
    }
    if has_duplicate_target(m) {
        return false;
    }

    // Sorted iteration keeps the walk, and any diagnostics, reproducible.
    for (sname, gname) in m {
        let Some(s) = sub.graph().node_by_name(sname) else {
            trace!(node = %sname, "mapping references a node missing from sub");
            return false;
        };
        let Some(g) = host.node_by_name(gname) else {
            trace!(node = %gname, "mapping references a node missing from graph");
            return false;
        };

        if !sub.is_entry(sname) && !neighbours_match(host, sub, s.preds(), g.preds(), m) {
            return false;
        }
        if !sub.is_exit(sname) && !neighbours_match(host, sub, s.succs(), g.succs(), m) {
            return false;
        }
    }

    true
}

/// Checks that the mapped images of the sub-side neighbours are exactly the
/// host-side neighbours, compared as multisets of node names.
fn neighbours_match(
    host: &Graph,
    sub: &Subgraph,
    s_adj: &[NodeId],
    g_adj: &[NodeId],
    m: &NodeMapping,
) -> bool {
    if s_adj.len() != g_adj.len() {
        return false;
    }
    s_adj.iter().all(|&sid| {
        let sname = sub.graph().node(sid).name();
        match m.get(sname) {
            Some(mapped) => g_adj.iter().any(|&gid| host.node(gid).name() == mapped),
            None => false,
        }
    })
}
