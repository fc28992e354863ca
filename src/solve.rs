//! Equation solving: unit propagation with brute-force branching.

#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, trace};

use crate::equation::Equation;
use crate::error::IsoError;
use crate::graph::Graph;
use crate::mapping::NodeMapping;
use crate::subgraph::Subgraph;
use crate::validator::is_valid;

impl Equation {
    /// Tries to locate a mapping from sub node name to host node name for an
    /// isomorphism of `sub` in `host`, based on the candidate sets of this
    /// equation.
    ///
    /// Unique candidates are propagated first; when none remain, the node
    /// with the fewest candidates is solved by brute force, with each
    /// candidate tried on its own copy of the equation. Acceptance is decided
    /// by the validator, never by the candidate table draining alone.
    pub fn solve(&mut self, host: &Graph, sub: &Subgraph) -> Result<NodeMapping, IsoError> {
        loop {
            if is_valid(host, sub, self.known()) {
                return Ok(self.known().clone());
            }
            if self.candidates().is_empty() {
                return Err(IsoError::NotAnIsomorphism);
            }
            if self.solve_unique()? {
                continue;
            }

            let sname = self.easiest()?.to_string();
            let branch: Vec<String> = self.candidates()[&sname].iter().cloned().collect();
            debug!(node = %sname, branches = branch.len(), "solving node pair by brute force");
            return self.solve_branches(host, sub, &sname, &branch);
        }
    }

    /// Tries each candidate in sorted order; the first branch that solves
    /// wins.
    #[cfg(not(feature = "rayon"))]
    fn solve_branches(
        &self,
        host: &Graph,
        sub: &Subgraph,
        sname: &str,
        branch: &[String],
    ) -> Result<NodeMapping, IsoError> {
        branch
            .iter()
            .find_map(|gname| self.try_branch(host, sub, sname, gname))
            .ok_or(IsoError::NoSolution)
    }

    /// Explores the branches concurrently. `find_map_first` keeps the
    /// leftmost success, so the result is the same mapping the sequential
    /// loop returns.
    #[cfg(feature = "rayon")]
    fn solve_branches(
        &self,
        host: &Graph,
        sub: &Subgraph,
        sname: &str,
        branch: &[String],
    ) -> Result<NodeMapping, IsoError> {
        branch
            .par_iter()
            .find_map_first(|gname| self.try_branch(host, sub, sname, gname))
            .ok_or(IsoError::NoSolution)
    }

    fn try_branch(
        &self,
        host: &Graph,
        sub: &Subgraph,
        sname: &str,
        gname: &str,
    ) -> Option<NodeMapping> {
        let mut fork = self.clone();
        if let Err(err) = fork.set_pair(sname, gname) {
            trace!(%err, sub_node = sname, host_node = gname, "branch rejected");
            return None;
        }
        match fork.solve(host, sub) {
            Ok(m) => Some(m),
            Err(err) => {
                trace!(%err, sub_node = sname, host_node = gname, "branch failed");
                None
            }
        }
    }
}
