use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use crate::algo::Outcome;
use crate::error::Error;
use crate::formulation::EdgeVariables;
use crate::id::NodeId;
use crate::solution::Solution;

/// Values above this are read as "edge selected".
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// Turns the solver's assignment back into a node sequence from `start` to `end`.
pub fn decode<N: NodeId>(
    outcome: Outcome,
    vars: &EdgeVariables<N>,
    start: &N,
    end: &N,
) -> Result<Solution<N>, Error> {
    let (values, objective) = match outcome {
        Outcome::Optimal { values, objective } => (values, objective),
        Outcome::Infeasible => return Ok(Solution::infeasible()),
        Outcome::Other(status) => return Err(Error::SolverStatus(status)),
    };

    let mut successors = BTreeMap::new();
    for (var, e) in vars.iter() {
        let value = values
            .get(var.index())
            .ok_or(Error::MissingValue(var.index()))?;
        if *value <= SELECTION_THRESHOLD {
            continue;
        }
        log::trace!("{:?} --> {:?}", e.source, e.target);

        match successors.entry(&e.source) {
            Entry::Vacant(entry) => {
                entry.insert(&e.target);
            }
            Entry::Occupied(_) => {
                return Err(Error::AmbiguousSuccessor(format!("{:?}", e.source)))
            }
        }
    }

    // a simple path visits every node at most once
    let max_steps = vars.nodes().len();
    let mut path = vec![start.clone()];
    let mut cur = start;
    while cur != end {
        if path.len() > max_steps {
            return Err(Error::UnterminatedWalk(max_steps));
        }
        cur = successors
            .get(cur)
            .copied()
            .ok_or_else(|| Error::MissingSuccessor(format!("{cur:?}")))?;
        path.push(cur.clone());
    }

    Ok(Solution::found(path, objective))
}
