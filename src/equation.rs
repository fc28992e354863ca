//! Node pair equations: the constraint state of the solver.

use crate::error::IsoError;
use crate::mapping::{CandidateTable, NodeMapping};

/// The unit of work for the solver: candidate sets `C` and known pairs `M`.
///
/// A sub node name appears in either `C` or `M`, never both, and the values
/// of `M` are distinct. Cloning an equation yields a deep copy that is safe
/// to mutate independently, which is how speculative branches are explored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Equation {
    c: CandidateTable,
    m: NodeMapping,
}

impl Equation {
    pub(crate) fn new(c: CandidateTable) -> Self {
        Equation {
            c,
            m: NodeMapping::new(),
        }
    }

    /// Candidate sets still to be solved.
    pub fn candidates(&self) -> &CandidateTable {
        &self.c
    }

    /// Node pairs known so far.
    pub fn known(&self) -> &NodeMapping {
        &self.m
    }

    /// Marks the node pair `sname -> gname` as known by removing it from `C`
    /// and storing it in `M`. As `gname` is no longer a valid candidate it is
    /// removed from all other candidate sets; emptying one of them fails the
    /// attempt.
    pub fn set_pair(&mut self, sname: &str, gname: &str) -> Result<(), IsoError> {
        if let Some((first, _)) = self.m.iter().find(|(_, target)| target.as_str() == gname) {
            return Err(IsoError::DuplicateTarget {
                first: first.clone(),
                second: sname.to_string(),
                target: gname.to_string(),
            });
        }

        self.m.insert(sname.to_string(), gname.to_string());
        self.c.remove(sname);

        for (key, set) in &mut self.c {
            set.remove(gname);
            if set.is_empty() {
                return Err(IsoError::NoCandidates(key.clone()));
            }
        }
        Ok(())
    }

    /// Resolves the first sub node with exactly one candidate left. Returns
    /// `Ok(false)` when no unique pair remains.
    pub fn solve_unique(&mut self) -> Result<bool, IsoError> {
        let unique = self.c.iter().find_map(|(sname, set)| match set.iter().next() {
            Some(gname) if set.len() == 1 => Some((sname.clone(), gname.clone())),
            _ => None,
        });
        match unique {
            Some((sname, gname)) => {
                self.set_pair(&sname, &gname)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Returns the sub node with the fewest candidates, breaking ties by
    /// name order.
    pub fn easiest(&self) -> Result<&str, IsoError> {
        let mut easiest: Option<(&str, usize)> = None;
        for (sname, set) in &self.c {
            if easiest.map_or(true, |(_, count)| set.len() < count) {
                easiest = Some((sname.as_str(), set.len()));
            }
        }
        easiest
            .map(|(sname, _)| sname)
            .ok_or(IsoError::NoBranchPoint)
    }
}
