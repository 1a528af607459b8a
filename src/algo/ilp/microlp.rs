use core::convert::Infallible;

use crate::algo::ilp::{solve_with, BinaryProgramSolver};
use crate::algo::{BinaryProgram, Outcome};

/// Pure Rust branch-and-bound backend, always available.
#[derive(Clone, Copy, Debug, Default)]
pub struct MicroLp;

impl BinaryProgramSolver for MicroLp {
    type Error = Infallible;

    fn solve(&mut self, program: &BinaryProgram) -> Result<Outcome, Self::Error> {
        Ok(solve_with(program, good_lp::solvers::microlp::microlp))
    }

    fn name(&self) -> &str {
        "microlp"
    }
}
