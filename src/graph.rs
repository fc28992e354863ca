//! Directed graph model for subgraph matching.
//!
//! Nodes are identified by opaque names and stored in an arena; adjacency is
//! represented as lists of [`NodeId`] indices, so cyclic graphs need no
//! reference counting. Graphs are built once (by a parser or by hand) and
//! treated as read-only during a search.

use std::collections::BTreeMap;

use ahash::AHashMap;

/// A lightweight index for nodes within a [`Graph`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    idx: usize,
}

impl NodeId {
    fn new(idx: usize) -> Self {
        NodeId { idx }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.idx
    }
}

/// A named node with ordered adjacency lists and a string attribute bag.
#[derive(Clone, Debug)]
pub struct Node {
    name: String,
    preds: Vec<NodeId>,
    succs: Vec<NodeId>,
    attrs: BTreeMap<String, String>,
}

impl Node {
    fn new(name: &str) -> Self {
        Node {
            name: name.to_string(),
            preds: Vec::new(),
            succs: Vec::new(),
            attrs: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Predecessors in insertion order.
    pub fn preds(&self) -> &[NodeId] {
        &self.preds
    }

    /// Successors in insertion order.
    pub fn succs(&self) -> &[NodeId] {
        &self.succs
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }
}

/// A directed graph with named nodes and insertion-ordered iteration.
///
/// An edge `u -> v` exists exactly when `v` is in the successor list of `u`
/// and `u` is in the predecessor list of `v`; [`Graph::add_edge`] records
/// both sides so the two views always agree.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: AHashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Graph::default()
    }

    /// Returns the node with the given name, inserting it if absent.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(name));
        self.index.insert(name.to_string(), id);
        id
    }

    /// Records the edge `from -> to`, inserting either endpoint if absent.
    pub fn add_edge(&mut self, from: &str, to: &str) {
        let from = self.add_node(from);
        let to = self.add_node(to);
        self.nodes[from.index()].succs.push(to);
        self.nodes[to.index()].preds.push(from);
    }

    /// Sets an attribute on the named node, inserting the node if absent.
    pub fn set_attr(&mut self, name: &str, key: &str, value: &str) {
        let id = self.add_node(name);
        self.nodes[id.index()]
            .attrs
            .insert(key.to_string(), value.to_string());
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.node_id(name).map(|id| self.node(id))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}
