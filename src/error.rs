//! Error taxonomy for subgraph construction, candidate finding and solving.
//!
//! Every failure is surfaced to the caller as a structured value; nothing in
//! this crate aborts the process. Most errors occur while preparing a search
//! (entry resolution, candidate discovery) rather than inside the solver's
//! branching loop.

use std::fmt;

use thiserror::Error;

/// Which distinguished designation of a subgraph an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Label {
    Entry,
    Exit,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Entry => write!(f, "entry"),
            Label::Exit => write!(f, "exit"),
        }
    }
}

/// Errors reported by the matching engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IsoError {
    /// The requested entry node does not exist in the host graph.
    #[error("unable to locate entry node {0:?} in graph")]
    EntryMissing(String),

    /// The subgraph's entry designation does not resolve to one of its nodes.
    #[error("unable to locate entry node {0:?} in sub")]
    SubEntryMissing(String),

    /// The host entry cannot match the subgraph entry.
    #[error("invalid entry node candidate {name:?}; expected {expected} successors, got {actual}")]
    EntryMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    /// The candidate walk did not reach every subgraph node.
    #[error("incomplete candidate mapping; expected {expected} nodes, got {actual}")]
    IncompleteCandidates { expected: usize, actual: usize },

    /// Two subgraph nodes would map to the same host node.
    #[error("invalid mapping; sub nodes {first:?} and {second:?} both map to graph node {target:?}")]
    DuplicateTarget {
        first: String,
        second: String,
        target: String,
    },

    /// Constraint propagation emptied the candidate set of a subgraph node.
    #[error("invalid mapping; sub node {0:?} has no candidates")]
    NoCandidates(String),

    /// The solver was asked to branch with no candidate sets left.
    #[error("no node pair left to branch on")]
    NoBranchPoint,

    /// Every branch of the brute-force search failed.
    #[error("unable to locate node pair mapping")]
    NoSolution,

    /// The candidate sets drained into a complete mapping that fails
    /// validation.
    #[error("complete mapping is not an isomorphism")]
    NotAnIsomorphism,

    /// Two nodes carry the same entry/exit designation.
    #[error("redefinition of {label} node; previous {previous:?}, new {new:?}")]
    LabelRedefinition {
        label: Label,
        previous: String,
        new: String,
    },

    /// No node carries the required designation.
    #[error("unable to locate {0} node")]
    LabelMissing(Label),
}
