//! Recursive matcher: a depth-first search that interleaves candidate
//! proposal and validation.
//!
//! This matcher and the equation solver are interchangeable from a caller's
//! viewpoint; they find the same valid mappings through a different search
//! shape.

use std::collections::BTreeSet;

use tracing::trace;

use crate::graph::{Graph, NodeId};
use crate::mapping::NodeMapping;
use crate::subgraph::Subgraph;
use crate::validator::is_valid;

/// Returns a mapping from sub node name to graph node name if there exists
/// an isomorphism of `sub` in `host` which starts at the `entry` node.
///
/// Candidate and degree failures along the way, including an unresolvable
/// `entry`, all collapse into `None`.
pub fn isomorphism(host: &Graph, entry: &str, sub: &Subgraph) -> Option<NodeMapping> {
    let g = host.node_id(entry)?;
    let s = sub.graph().node_id(sub.entry())?;

    let mut dfs = Dfs {
        host,
        sub,
        mapping: NodeMapping::new(),
        visited: BTreeSet::new(),
    };
    if dfs.find(g, s) {
        Some(dfs.mapping)
    } else {
        None
    }
}

struct Dfs<'a> {
    host: &'a Graph,
    sub: &'a Subgraph,
    mapping: NodeMapping,
    /// Mapping states already explored; guards against re-walking cycles.
    visited: BTreeSet<Vec<(String, String)>>,
}

impl Dfs<'_> {
    /// Explores the candidate pair `(g, s)`.
    ///
    /// Slots claimed by abandoned branches are overwritten by later attempts
    /// rather than rolled back; the validator arbitrates every complete
    /// mapping, so a stale entry can never produce a false positive, while
    /// symmetric shapes need the leftovers to complete their second branch.
    fn find(&mut self, g: NodeId, s: NodeId) -> bool {
        let gname = self.host.node(g).name().to_string();
        let sname = self.sub.graph().node(s).name().to_string();

        if self.sub.is_entry(&sname) {
            // The entry is pinned to the requested host node once and for
            // all; revisits through back-edges must not move it.
            self.mapping.entry(sname.clone()).or_insert_with(|| gname.clone());
        } else {
            self.mapping.insert(sname.clone(), gname.clone());
        }

        if !self.visited.insert(snapshot(&self.mapping)) {
            trace!(sub_node = %sname, host_node = %gname, "mapping state already explored");
            return false;
        }

        if self.mapping.len() == self.sub.graph().node_count()
            && is_valid(self.host, self.sub, &self.mapping)
        {
            return true;
        }

        let snode = self.sub.graph().node(s);
        let gnode = self.host.node(g);

        if !self.sub.is_entry(&sname) && snode.preds().len() != gnode.preds().len() {
            return false;
        }
        if !self.sub.is_exit(&sname) {
            if snode.succs().len() != gnode.succs().len() {
                return false;
            }
            for &ssucc in snode.succs() {
                for &gsucc in gnode.succs() {
                    if self.find(gsucc, ssucc) {
                        return true;
                    }
                }
            }
        }

        false
    }
}

fn snapshot(m: &NodeMapping) -> Vec<(String, String)> {
    m.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
}
