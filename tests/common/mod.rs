//! Shared fixtures for the integration tests.
//!
//! The hosts are small control-flow fragments built through the public
//! construction API; nodes are declared up front so the iteration order is
//! pinned regardless of edge order.

use cfg_subgraph::{CandidateTable, Graph, NodeMapping, Subgraph};

/// A statement-level CFG fragment. Notable regions:
///
/// - `71 -> {74, 75}, 74 -> 75`: a conditional without an else branch;
/// - `85 -> {86, 88}`: a two-way branch whose arms reconverge on `88`
///   (degenerate, both arms would need the same node);
/// - `89 -> 92, 92 <-> 93`: a pre-test loop;
/// - `97`: a straight-line node used to probe entry degree mismatches.
pub fn stmt() -> Graph {
    let mut g = Graph::new();
    for name in [
        "68", "71", "74", "75", "77", "84", "85", "86", "87", "88", "89", "92", "93", "94",
        "97", "98",
    ] {
        g.add_node(name);
    }
    for (from, to) in [
        ("68", "71"),
        ("71", "74"),
        ("71", "75"),
        ("74", "75"),
        ("75", "77"),
        ("77", "84"),
        ("84", "85"),
        ("84", "86"),
        ("85", "86"),
        ("85", "88"),
        ("86", "87"),
        ("87", "89"),
        ("88", "89"),
        ("89", "92"),
        ("92", "93"),
        ("93", "92"),
        ("94", "97"),
        ("97", "98"),
    ] {
        g.add_edge(from, to);
    }
    g
}

/// A function-body fragment whose first straight-line pair in node order is
/// `740 -> 760`; every earlier node fails an entry or exit degree check.
pub fn main_graph() -> Graph {
    let mut g = Graph::new();
    for name in ["10", "20", "30", "34", "740", "760", "761", "762"] {
        g.add_node(name);
    }
    for (from, to) in [
        ("10", "20"),
        ("10", "30"),
        ("20", "30"),
        ("30", "740"),
        ("34", "740"),
        ("740", "760"),
        ("760", "761"),
        ("760", "762"),
        ("761", "762"),
    ] {
        g.add_edge(from, to);
    }
    g
}

fn subgraph(edges: &[(&str, &str)], entry: &str, exit: &str) -> Subgraph {
    let mut g = Graph::new();
    for (from, to) in edges {
        g.add_edge(from, to);
    }
    g.set_attr(entry, "label", "entry");
    g.set_attr(exit, "label", "exit");
    Subgraph::new(g).expect("fixture subgraph")
}

/// `A -> {B, C}, B -> C`: a conditional without an else branch.
pub fn if_sub() -> Subgraph {
    subgraph(&[("A", "B"), ("A", "C"), ("B", "C")], "A", "C")
}

/// `A -> {B, C}, {B, C} -> D`: a two-way conditional.
pub fn if_else_sub() -> Subgraph {
    subgraph(&[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")], "A", "D")
}

/// The if_else shape as a plain host graph (for self-matching).
pub fn if_else_host() -> Graph {
    let mut g = Graph::new();
    for (from, to) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")] {
        g.add_edge(from, to);
    }
    g
}

/// `A -> B, B <-> C`: a pre-test loop.
pub fn pre_loop_sub() -> Subgraph {
    subgraph(&[("A", "B"), ("B", "C"), ("C", "B")], "A", "C")
}

/// `A -> B`: a straight-line list.
pub fn list_sub() -> Subgraph {
    subgraph(&[("A", "B")], "A", "B")
}

pub fn mapping(pairs: &[(&str, &str)]) -> NodeMapping {
    pairs
        .iter()
        .map(|(sname, gname)| (sname.to_string(), gname.to_string()))
        .collect()
}

pub fn table(entries: &[(&str, &[&str])]) -> CandidateTable {
    entries
        .iter()
        .map(|(sname, targets)| {
            (
                sname.to_string(),
                targets.iter().map(|t| t.to_string()).collect(),
            )
        })
        .collect()
}
