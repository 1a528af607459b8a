use core::convert::Infallible;

use crate::algo::ilp::{solve_with, BinaryProgramSolver};
use crate::algo::{BinaryProgram, Outcome};

/// HiGHS backend, compiled in with the `highs` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct Highs;

impl BinaryProgramSolver for Highs {
    type Error = Infallible;

    fn solve(&mut self, program: &BinaryProgram) -> Result<Outcome, Self::Error> {
        Ok(solve_with(program, good_lp::solvers::highs::highs))
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}
