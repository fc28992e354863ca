//! Candidate discovery.
//!
//! Walks the subgraph and the host in lock-step from their entry nodes,
//! collecting for each subgraph node the set of host nodes it could
//! plausibly map to. The result seeds the equation solver.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::equation::Equation;
use crate::error::IsoError;
use crate::graph::{Graph, Node};
use crate::mapping::CandidateTable;
use crate::subgraph::Subgraph;

/// Locates a mapping from sub node name to host node name candidates for an
/// isomorphism of `sub` in `host` which starts at the `entry` node.
pub fn candidates(host: &Graph, entry: &str, sub: &Subgraph) -> Result<Equation, IsoError> {
    let g = host
        .node_by_name(entry)
        .ok_or_else(|| IsoError::EntryMissing(entry.to_string()))?;
    let s = sub
        .graph()
        .node_by_name(sub.entry())
        .ok_or_else(|| IsoError::SubEntryMissing(sub.entry().to_string()))?;

    if !is_potential(g, s, sub) {
        return Err(IsoError::EntryMismatch {
            name: entry.to_string(),
            expected: s.succs().len(),
            actual: g.succs().len(),
        });
    }

    let mut table = CandidateTable::new();
    locate(g, s, host, sub, &mut table);

    let expected = sub.graph().node_count();
    if table.len() != expected {
        return Err(IsoError::IncompleteCandidates {
            expected,
            actual: table.len(),
        });
    }
    debug!(entry, nodes = expected, "candidate table complete");
    Ok(Equation::new(table))
}

/// Returns true if the host node `g` is a potential candidate for the sub
/// node `s`: predecessor counts must agree unless `s` is the entry, and
/// successor counts unless `s` is the exit.
fn is_potential(g: &Node, s: &Node, sub: &Subgraph) -> bool {
    if !sub.is_entry(s.name()) && g.preds().len() != s.preds().len() {
        return false;
    }
    if !sub.is_exit(s.name()) && g.succs().len() != s.succs().len() {
        return false;
    }
    true
}

/// Recursively records potential node pairs, exploring sub successors in
/// lock-step with host successors.
fn locate(g: &Node, s: &Node, host: &Graph, sub: &Subgraph, table: &mut CandidateTable) {
    if !is_potential(g, s, sub) {
        trace!(sub_node = s.name(), host_node = g.name(), "pruned node pair");
        return;
    }

    match table.get_mut(s.name()) {
        Some(set) => {
            // A pair already recorded ends the walk on this path; this is
            // what terminates the recursion across back-edges.
            if set.contains(g.name()) {
                trace!(sub_node = s.name(), host_node = g.name(), "already visited");
                return;
            }
            // The entry keeps the single candidate it was seeded with, but
            // the walk still continues through the revisit's successors.
            if !sub.is_entry(s.name()) {
                set.insert(g.name().to_string());
            }
        }
        None => {
            table.insert(
                s.name().to_string(),
                BTreeSet::from([g.name().to_string()]),
            );
        }
    }

    for &ssucc in s.succs() {
        for &gsucc in g.succs() {
            locate(host.node(gsucc), sub.graph().node(ssucc), host, sub, table);
        }
    }
}
