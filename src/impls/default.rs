use core::marker::PhantomData;
use std::collections::BTreeMap;

use itertools::Itertools;

use crate::algo::ilp::BinaryProgramSolver;
use crate::decode::decode;
use crate::edge::{Edge, SimpleEdge};
use crate::error::Error;
use crate::formulation::EdgeVariables;
use crate::id::NodeId;
use crate::normalize::normalize;
use crate::solution::Solution;
use crate::PathFinder;

/// Absolute slack allowed between a reported cost and the cost recomputed from the edges.
const COST_TOLERANCE: f64 = 1e-6;

#[derive(Clone, Debug)]
pub struct DefaultPathFinder<N, Algo> {
    algo: Algo,
    _phantom: PhantomData<N>,
}

impl<N, Algo> DefaultPathFinder<N, Algo> {
    pub fn new(algo: Algo) -> Self {
        Self {
            algo,
            _phantom: Default::default(),
        }
    }
}

impl<N, Algo> PathFinder for DefaultPathFinder<N, Algo>
where
    N: NodeId,
    Algo: BinaryProgramSolver,
{
    type NodeId = N;
    type Edges = Vec<SimpleEdge<N>>;
    type Error = Error;

    fn shortest_path(
        &mut self,
        edges: Self::Edges,
        start: N,
        end: N,
        directed: bool,
    ) -> Result<Solution<N>, Self::Error> {
        let edges = normalize(edges, directed);

        if start == end {
            if !edges
                .iter()
                .any(|e| *e.source() == start || *e.target() == start)
            {
                log::info!("{start:?} is not an endpoint of any edge: infeasible");
                return Ok(Solution::infeasible());
            }
            log::debug!("start and end are both {start:?}, nothing to solve");
            return Ok(Solution::found(vec![start], 0.0));
        }
        let vars = EdgeVariables::new(&edges, &start, &end);

        // an empty degree row can never sum to one
        if vars.start_exits().is_empty() || vars.end_entries().is_empty() {
            log::info!("no edge leaves {start:?} or no edge enters {end:?}: infeasible");
            return Ok(Solution::infeasible());
        }

        let program = vars.program();
        log::debug!(
            "{} variables, {} constraints, solver: {}",
            program.variables().len(),
            program.constraints().len(),
            self.algo.name()
        );

        let outcome = self
            .algo
            .solve(&program)
            .map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?;

        let solution = decode(outcome, &vars, &start, &end)?;
        match (solution.path(), solution.cost()) {
            (Some(path), Some(cost)) => log::info!(
                "shortest path {} with cost {cost}",
                path.iter().map(|n| format!("{n:?}")).join(" -> ")
            ),
            _ => log::info!("no path from {start:?} to {end:?}"),
        }

        Ok(solution)
    }

    fn check(
        &self,
        edges: &Self::Edges,
        start: &N,
        end: &N,
        directed: bool,
        solution: &Solution<N>,
    ) -> Result<(), Self::Error> {
        let path = match solution.path() {
            Some(path) => path,
            None => return Ok(()),
        };

        if path.first() != Some(start) || path.last() != Some(end) {
            return Err(Error::InvalidPath(format!(
                "path does not run from {start:?} to {end:?}"
            )));
        }

        // cheapest cost per (source, target), parallel edges collapse to their minimum
        let cheapest = normalize(edges.clone(), directed).iter().fold(
            BTreeMap::<(N, N), f64>::new(),
            |mut acc, e| {
                let cost = acc
                    .entry((e.source().clone(), e.target().clone()))
                    .or_insert(e.cost());
                *cost = cost.min(e.cost());
                acc
            },
        );

        let total = path
            .iter()
            .tuple_windows()
            .map(|(s, t)| {
                cheapest
                    .get(&(s.clone(), t.clone()))
                    .copied()
                    .ok_or_else(|| Error::InvalidPath(format!("no edge {s:?} -> {t:?}")))
            })
            .sum::<Result<f64, Error>>()?;

        let reported = solution.cost().unwrap_or_default();
        if (total - reported).abs() > COST_TOLERANCE {
            return Err(Error::InvalidPath(format!(
                "reported cost {reported} but edges add up to {total}"
            )));
        }

        log::debug!("path of {} nodes checked, cost {total}", path.len());

        Ok(())
    }
}
