//! Subgraph isomorphism search for control-flow graphs.
//!
//! This crate locates occurrences of a small labelled pattern graph (a
//! [`Subgraph`] with designated entry and exit nodes) inside a larger
//! directed host [`Graph`], under a restricted notion of isomorphism
//! tailored for control-flow analysis: edges entering the entry and edges
//! leaving the exit are ignored, and all remaining predecessor/successor
//! structure must agree exactly. A decompiler uses this to recognise
//! high-level primitives — conditionals, pre-test loops, statement lists —
//! inside a reconstructed control-flow graph.
//!
//! Two interchangeable matchers are provided:
//!
//! - [`candidates`] + [`Equation::solve`]: compute per-node candidate sets,
//!   then reduce them by unique-candidate propagation with brute-force
//!   branching for the residue;
//! - [`isomorphism`]: a recursive search interleaving candidate proposal and
//!   validation.
//!
//! [`search`] and [`search_all`] drive the matcher across a whole host.
//! [`is_valid`] is the acceptance test both matchers delegate to.

mod candidates;
mod equation;
mod error;
mod graph;
mod mapping;
mod matcher;
mod search;
mod solve;
mod subgraph;
mod validator;

pub use candidates::candidates;
pub use equation::Equation;
pub use error::{IsoError, Label};
pub use graph::{Graph, Node, NodeId};
pub use mapping::{CandidateTable, NodeMapping};
pub use matcher::isomorphism;
pub use search::{search, search_all};
pub use subgraph::Subgraph;
pub use validator::is_valid;
