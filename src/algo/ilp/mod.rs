#[cfg(feature = "highs")]
pub mod highs;

pub mod microlp;

use core::fmt::Debug;
use std::time::Instant;

use good_lp::solvers::Solver;
use good_lp::{
    constraint, variable, Expression, ProblemVariables, ResolutionError, Solution as _,
    SolverModel, Variable,
};

use crate::algo::{BinaryProgram, Outcome, Rhs, VarId};

/// A mixed-integer solver able to minimize a [`BinaryProgram`].
pub trait BinaryProgramSolver {
    type Error: Debug;

    /// Solve the program and report its status along with, when optimal, the value of every
    /// variable and of the objective.
    fn solve(&mut self, program: &BinaryProgram) -> Result<Outcome, Self::Error>;

    fn name(&self) -> &str;
}

fn sum_of(handles: &[Variable], vars: &[VarId]) -> Expression {
    vars.iter().map(|v| handles[v.index()]).sum()
}

/// Translates the program into a `good_lp` model, solves it with `solver` and maps the result
/// back onto [`Outcome`].
pub(crate) fn solve_with<S>(program: &BinaryProgram, solver: S) -> Outcome
where
    S: Solver,
    S::Model: SolverModel<Error = ResolutionError>,
{
    let start_time = Instant::now();

    let mut vars = ProblemVariables::new();
    let handles: Vec<Variable> = program
        .variables()
        .iter()
        .map(|name| vars.add(variable().integer().min(0.0).max(1.0).name(name)))
        .collect();

    let objective: Expression = program
        .objective()
        .iter()
        .map(|(v, cost)| *cost * handles[v.index()])
        .sum();

    let model = program.constraints().iter().fold(
        vars.minimise(objective).using(solver),
        |model, c| {
            let lhs = sum_of(&handles, &c.lhs);
            let rhs = match &c.rhs {
                Rhs::Constant(k) => Expression::from(*k),
                Rhs::Sum(terms) => sum_of(&handles, terms),
            };
            model.with(constraint::eq(lhs, rhs))
        },
    );

    let result = model.solve();
    log::debug!(
        "solved {} variables / {} constraints in {:.3} ms",
        handles.len(),
        program.constraints().len(),
        start_time.elapsed().as_secs_f64() * 1000.0
    );

    match result {
        Ok(sol) => {
            let values: Vec<f64> = handles.iter().map(|&v| sol.value(v)).collect();
            match program.objective_value(&values) {
                Some(objective) => Outcome::Optimal { values, objective },
                None => Outcome::Other("objective refers to an unknown variable".into()),
            }
        }
        Err(ResolutionError::Infeasible) => Outcome::Infeasible,
        Err(e) => Outcome::Other(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::microlp::MicroLp;
    use super::*;
    use crate::algo::LinearEquality;

    fn pick_one(costs: &[f64]) -> (BinaryProgram, Vec<VarId>) {
        let mut p = BinaryProgram::new();
        let vars: Vec<_> = (0..costs.len())
            .map(|i| p.add_variable(format!("x{i}")))
            .collect();
        p.add_constraint(LinearEquality {
            name: "one".into(),
            lhs: vars.clone(),
            rhs: Rhs::Constant(1.0),
        });
        p.set_objective(vars.iter().copied().zip(costs.iter().copied()).collect());
        (p, vars)
    }

    #[test]
    fn picks_the_cheapest_variable() {
        let (p, _) = pick_one(&[4.0, 1.5, 3.0]);
        match MicroLp.solve(&p).unwrap() {
            Outcome::Optimal { values, objective } => {
                assert!((objective - 1.5).abs() < 1e-6);
                assert!(values[1] > 0.5);
                assert!(values[0] < 0.5 && values[2] < 0.5);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn balances_two_sums() {
        let (mut p, vars) = pick_one(&[1.0, 2.0]);
        let extra = p.add_variable("y");
        // y must follow x1
        p.add_constraint(LinearEquality {
            name: "follow".into(),
            lhs: vec![vars[1]],
            rhs: Rhs::Sum(vec![extra]),
        });
        p.set_objective(vec![(vars[0], 5.0), (vars[1], 1.0), (extra, 1.0)]);

        match MicroLp.solve(&p).unwrap() {
            Outcome::Optimal { values, objective } => {
                assert!((objective - 2.0).abs() < 1e-6);
                assert!(values[vars[1].index()] > 0.5);
                assert!(values[extra.index()] > 0.5);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
    }

    #[test]
    fn reports_infeasibility() {
        let (mut p, vars) = pick_one(&[1.0, 1.0]);
        p.add_constraint(LinearEquality {
            name: "none".into(),
            lhs: vars,
            rhs: Rhs::Constant(0.0),
        });
        assert_eq!(MicroLp.solve(&p).unwrap(), Outcome::Infeasible);
    }
}
