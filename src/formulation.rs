use std::collections::{BTreeMap, BTreeSet};

use crate::algo::{BinaryProgram, LinearEquality, Rhs, VarId};
use crate::edge::Edge;
use crate::id::NodeId;

/// The endpoints and cost behind one decision variable.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeVar<N> {
    pub source: N,
    pub target: N,
    pub cost: f64,
}

/// One binary variable per directed edge, grouped the way the constraints need them.
///
/// Every edge owns its variable, parallel edges included. The `(source, target)` lookup is the
/// only place where parallel edges collide; the later edge wins there.
#[derive(Clone, Debug)]
pub struct EdgeVariables<N> {
    program: BinaryProgram,
    arena: Vec<(VarId, EdgeVar<N>)>,
    by_pair: BTreeMap<(N, N), VarId>,
    by_exit: BTreeMap<N, Vec<VarId>>,
    by_entry: BTreeMap<N, Vec<VarId>>,
    start_exits: Vec<VarId>,
    end_entries: Vec<VarId>,
}

impl<N: NodeId> EdgeVariables<N> {
    pub fn new<'a, E>(edges: impl IntoIterator<Item = &'a E>, start: &N, end: &N) -> Self
    where
        E: 'a + Edge<NodeId = N>,
    {
        let mut vars = Self {
            program: BinaryProgram::new(),
            arena: Vec::new(),
            by_pair: BTreeMap::new(),
            by_exit: BTreeMap::new(),
            by_entry: BTreeMap::new(),
            start_exits: Vec::new(),
            end_entries: Vec::new(),
        };

        for e in edges {
            let (source, target) = (e.source(), e.target());
            let var = vars.program.add_variable(format!(
                "x_{:?}_{:?}_{}",
                source,
                target,
                vars.arena.len()
            ));
            vars.arena.push((
                var,
                EdgeVar {
                    source: source.clone(),
                    target: target.clone(),
                    cost: e.cost(),
                },
            ));

            if let Some(prev) = vars.by_pair.insert((source.clone(), target.clone()), var) {
                log::warn!(
                    "parallel edge {:?} -> {:?}: variable {} shadows {} in the pair lookup",
                    source,
                    target,
                    var.index(),
                    prev.index()
                );
            }

            if source == start {
                vars.start_exits.push(var);
            } else {
                vars.by_exit.entry(source.clone()).or_default().push(var);
            }

            if target == end {
                vars.end_entries.push(var);
            } else {
                vars.by_entry.entry(target.clone()).or_default().push(var);
            }
        }

        vars
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn edge(&self, var: VarId) -> &EdgeVar<N> {
        &self.arena[var.index()].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (VarId, &EdgeVar<N>)> {
        self.arena.iter().map(|(var, e)| (*var, e))
    }

    /// The variable registered last for the `(source, target)` pair.
    pub fn variable(&self, source: &N, target: &N) -> Option<VarId> {
        self.by_pair.get(&(source.clone(), target.clone())).copied()
    }

    pub fn exits(&self, node: &N) -> &[VarId] {
        self.by_exit.get(node).map_or(&[][..], Vec::as_slice)
    }

    pub fn entries(&self, node: &N) -> &[VarId] {
        self.by_entry.get(node).map_or(&[][..], Vec::as_slice)
    }

    pub fn start_exits(&self) -> &[VarId] {
        &self.start_exits
    }

    pub fn end_entries(&self) -> &[VarId] {
        &self.end_entries
    }

    /// Every node that shows up as an endpoint, start and end included.
    pub fn nodes(&self) -> BTreeSet<&N> {
        self.arena
            .iter()
            .flat_map(|(_, e)| [&e.source, &e.target])
            .collect()
    }

    /// Nodes that get a flow conservation row.
    pub fn transit_nodes(&self) -> BTreeSet<&N> {
        self.by_entry.keys().chain(self.by_exit.keys()).collect()
    }

    /// The complete program: variables, constraints and objective.
    pub fn program(&self) -> BinaryProgram {
        let mut program = self.program.clone();
        build_constraints(self)
            .into_iter()
            .for_each(|c| program.add_constraint(c));
        program.set_objective(build_objective(self));
        program
    }
}

/// Degree constraints at start and end, one balance row per transit node, and every self-loop
/// fixed at zero.
pub fn build_constraints<N: NodeId>(vars: &EdgeVariables<N>) -> Vec<LinearEquality> {
    let mut constraints = vec![
        LinearEquality {
            name: "start_degree".into(),
            lhs: vars.start_exits().to_vec(),
            rhs: Rhs::Constant(1.0),
        },
        LinearEquality {
            name: "end_degree".into(),
            lhs: vars.end_entries().to_vec(),
            rhs: Rhs::Constant(1.0),
        },
    ];

    constraints.extend(vars.transit_nodes().into_iter().map(|node| LinearEquality {
        name: format!("flow_{node:?}"),
        lhs: vars.entries(node).to_vec(),
        rhs: Rhs::Sum(vars.exits(node).to_vec()),
    }));

    // a self-loop sits on both sides of its own balance row
    constraints.extend(
        vars.iter()
            .filter(|(_, e)| e.source == e.target)
            .map(|(var, e)| LinearEquality {
                name: format!("self_loop_{:?}_{}", e.source, var.index()),
                lhs: vec![var],
                rhs: Rhs::Constant(0.0),
            }),
    );

    constraints
}

/// `sum(variable * cost)` over every edge.
pub fn build_objective<N: NodeId>(vars: &EdgeVariables<N>) -> Vec<(VarId, f64)> {
    vars.iter().map(|(var, e)| (var, e.cost)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::SimpleEdge;

    fn sample() -> Vec<SimpleEdge<i32>> {
        [(1, 2, 5), (2, 3, 5), (3, 4, 1), (1, 3, 300), (1, 4, 1)]
            .into_iter()
            .map(|(s, t, c)| SimpleEdge::new(s, t, c).unwrap())
            .collect()
    }

    fn pairs(vars: &EdgeVariables<i32>, ids: &[VarId]) -> Vec<(i32, i32)> {
        ids.iter()
            .map(|&v| (vars.edge(v).source, vars.edge(v).target))
            .collect()
    }

    #[test]
    fn one_variable_per_edge() {
        let edges = sample();
        let vars = EdgeVariables::new(&edges, &1, &3);
        assert_eq!(vars.len(), 5);
        assert_eq!(vars.program().variables()[0], "x_1_2_0");
        assert_eq!(vars.variable(&1, &3), Some(vars.iter().nth(3).unwrap().0));
        assert_eq!(vars.variable(&3, &1), None);
    }

    #[test]
    fn groups_variables_by_role() {
        let edges = sample();
        let vars = EdgeVariables::new(&edges, &1, &3);

        assert_eq!(pairs(&vars, vars.start_exits()), [(1, 2), (1, 3), (1, 4)]);
        assert_eq!(pairs(&vars, vars.end_entries()), [(2, 3), (1, 3)]);

        // edges leaving the start node are not listed as exits
        assert!(vars.exits(&1).is_empty());
        assert_eq!(pairs(&vars, vars.exits(&3)), [(3, 4)]);
        // edges entering the end node are not listed as entries
        assert!(vars.entries(&3).is_empty());
        assert_eq!(pairs(&vars, vars.entries(&4)), [(3, 4), (1, 4)]);

        assert_eq!(vars.transit_nodes().into_iter().collect::<Vec<_>>(), [&2, &3, &4]);
        assert_eq!(vars.nodes().len(), 4);
    }

    #[test]
    fn builds_degree_and_flow_constraints() {
        let edges = sample();
        let vars = EdgeVariables::new(&edges, &1, &3);
        let constraints = build_constraints(&vars);

        assert_eq!(constraints.len(), 2 + 3);
        assert_eq!(constraints[0].rhs, Rhs::Constant(1.0));
        assert_eq!(constraints[0].lhs, vars.start_exits());
        assert_eq!(constraints[1].lhs, vars.end_entries());

        // the end node may not be left again
        let at_end = constraints.iter().find(|c| c.name == "flow_3").unwrap();
        assert!(at_end.lhs.is_empty());
        assert_eq!(at_end.rhs, Rhs::Sum(vars.exits(&3).to_vec()));
    }

    #[test]
    fn self_loops_are_fixed_at_zero() {
        let edges: Vec<_> = [(1, 1, 3), (1, 2, 5), (2, 2, -4), (2, 3, 1)]
            .into_iter()
            .map(|(s, t, c)| SimpleEdge::new(s, t, c).unwrap())
            .collect();
        let vars = EdgeVariables::new(&edges, &1, &3);
        let constraints = build_constraints(&vars);

        let pinned: Vec<_> = constraints
            .iter()
            .filter(|c| c.name.starts_with("self_loop_"))
            .collect();
        assert_eq!(pinned.len(), 2);
        for c in pinned {
            assert_eq!(c.rhs, Rhs::Constant(0.0));
            let pair = pairs(&vars, &c.lhs);
            assert_eq!(pair.len(), 1);
            assert_eq!(pair[0].0, pair[0].1);
        }

        // the loop at 2 cancels out of its own balance row
        let at_2 = constraints.iter().find(|c| c.name == "flow_2").unwrap();
        assert!(at_2.lhs.contains(&vars.variable(&2, &2).unwrap()));
        assert_eq!(at_2.rhs, Rhs::Sum(vars.exits(&2).to_vec()));
    }

    #[test]
    fn objective_covers_every_edge() {
        let edges = sample();
        let vars = EdgeVariables::new(&edges, &1, &3);
        let costs: Vec<f64> = build_objective(&vars).into_iter().map(|(_, c)| c).collect();
        assert_eq!(costs, [5.0, 5.0, 1.0, 300.0, 1.0]);
    }

    #[test]
    fn parallel_edges_keep_their_own_variables() {
        let edges = vec![
            SimpleEdge::new('a', 'b', 4).unwrap(),
            SimpleEdge::new('a', 'b', 2).unwrap(),
        ];
        let vars = EdgeVariables::new(&edges, &'a', &'b');

        assert_eq!(vars.len(), 2);
        assert_eq!(vars.start_exits().len(), 2);
        assert_eq!(build_objective(&vars).len(), 2);

        let last = vars.variable(&'a', &'b').unwrap();
        assert_eq!(vars.edge(last).cost, 2.0);
    }

    #[test]
    fn program_bundles_everything() {
        let edges = sample();
        let program = EdgeVariables::new(&edges, &1, &3).program();
        assert_eq!(program.variables().len(), 5);
        assert_eq!(program.constraints().len(), 5);
        assert_eq!(program.objective().len(), 5);
    }
}
