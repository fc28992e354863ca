//! Host-wide search drivers.

use tracing::{debug, info};

use crate::graph::Graph;
use crate::mapping::NodeMapping;
use crate::matcher::isomorphism;
use crate::subgraph::Subgraph;

/// Tries to locate an isomorphism of `sub` in `host`, taking every host node
/// in turn as the entry. Returns the first mapping located; the stable host
/// node order makes the result deterministic.
pub fn search(host: &Graph, sub: &Subgraph) -> Option<NodeMapping> {
    info!(
        host_nodes = host.node_count(),
        sub_nodes = sub.graph().node_count(),
        "searching host for subgraph"
    );
    for node in host.nodes() {
        if let Some(m) = isomorphism(host, node.name(), sub) {
            debug!(entry = node.name(), "isomorphism located");
            return Some(m);
        }
    }
    None
}

/// Collects every isomorphism of `sub` in `host`, in host node order.
pub fn search_all(host: &Graph, sub: &Subgraph) -> Vec<NodeMapping> {
    host.nodes()
        .filter_map(|node| isomorphism(host, node.name(), sub))
        .collect()
}
