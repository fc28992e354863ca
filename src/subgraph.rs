//! Subgraph view: a graph with designated entry and exit nodes.

use crate::error::{IsoError, Label};
use crate::graph::Graph;

/// Attribute key carrying the entry/exit designation.
const LABEL_ATTR: &str = "label";

/// A pattern graph with a dedicated entry and exit node.
///
/// Incoming edges to the entry and outgoing edges from the exit are ignored
/// when searching for isomorphisms of the subgraph. Entry and exit are
/// determined at construction time from the node `label` attribute:
///
/// ```text
/// digraph if {
///     A [label="entry"]
///     B
///     C [label="exit"]
///     A -> B
///     A -> C
///     B -> C
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Subgraph {
    graph: Graph,
    entry: String,
    exit: String,
}

impl Subgraph {
    /// Builds a subgraph from `graph`, resolving the entry and exit nodes
    /// from their `label` attributes. Exactly one of each must exist.
    pub fn new(graph: Graph) -> Result<Self, IsoError> {
        let mut entry: Option<String> = None;
        let mut exit: Option<String> = None;
        for node in graph.nodes() {
            let label = match node.attr(LABEL_ATTR) {
                Some("entry") => (Label::Entry, &mut entry),
                Some("exit") => (Label::Exit, &mut exit),
                _ => continue,
            };
            let (which, slot) = label;
            if let Some(previous) = slot.replace(node.name().to_string()) {
                return Err(IsoError::LabelRedefinition {
                    label: which,
                    previous,
                    new: node.name().to_string(),
                });
            }
        }
        let entry = entry.ok_or(IsoError::LabelMissing(Label::Entry))?;
        let exit = exit.ok_or(IsoError::LabelMissing(Label::Exit))?;
        Ok(Subgraph { graph, entry, exit })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Name of the entry node.
    pub fn entry(&self) -> &str {
        &self.entry
    }

    /// Name of the exit node.
    pub fn exit(&self) -> &str {
        &self.exit
    }

    pub fn is_entry(&self, name: &str) -> bool {
        self.entry == name
    }

    pub fn is_exit(&self, name: &str) -> bool {
        self.exit == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled(entry: &str, exit: &str) -> Graph {
        let mut g = Graph::new();
        g.add_edge("A", "B");
        g.add_edge("B", "C");
        g.set_attr(entry, "label", "entry");
        g.set_attr(exit, "label", "exit");
        g
    }

    #[test]
    fn resolves_entry_and_exit_from_labels() {
        let sub = Subgraph::new(labelled("A", "C")).unwrap();
        assert_eq!(sub.entry(), "A");
        assert_eq!(sub.exit(), "C");
        assert!(sub.is_entry("A"));
        assert!(!sub.is_exit("B"));
    }

    #[test]
    fn rejects_entry_redefinition() {
        let mut g = labelled("A", "C");
        g.set_attr("B", "label", "entry");
        let err = Subgraph::new(g).unwrap_err();
        assert_eq!(
            err,
            IsoError::LabelRedefinition {
                label: Label::Entry,
                previous: "A".to_string(),
                new: "B".to_string(),
            }
        );
    }

    #[test]
    fn rejects_exit_redefinition() {
        let mut g = labelled("A", "C");
        g.set_attr("B", "label", "exit");
        let err = Subgraph::new(g).unwrap_err();
        assert_eq!(
            err,
            IsoError::LabelRedefinition {
                label: Label::Exit,
                previous: "C".to_string(),
                new: "B".to_string(),
            }
        );
    }

    #[test]
    fn rejects_missing_labels() {
        let mut g = Graph::new();
        g.add_edge("A", "B");
        assert_eq!(
            Subgraph::new(g.clone()).unwrap_err(),
            IsoError::LabelMissing(Label::Entry)
        );
        g.set_attr("A", "label", "entry");
        assert_eq!(
            Subgraph::new(g).unwrap_err(),
            IsoError::LabelMissing(Label::Exit)
        );
    }
}
