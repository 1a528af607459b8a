use displaydoc::Display;

#[derive(Clone, Debug, Display, PartialEq)]
pub enum Error {
    /// Invalid edge cost, expected a value representable as a real number
    NonNumericCost,
    /// Invalid edge cost, expected a finite value but got {0}
    NonFiniteCost(f64),
    /// Solver finished with an unsupported status: {0}
    SolverStatus(String),
    /// Solver backend specific error: {0}
    AlgoSpecific(String),
    /// Solver returned no value for variable {0}
    MissingValue(usize),
    /// Selected edges do not continue the path from node {0}
    MissingSuccessor(String),
    /// More than one selected edge leaves node {0}
    AmbiguousSuccessor(String),
    /// Path walk did not reach the end node within {0} steps
    UnterminatedWalk(usize),
    /// Solution is not backed by the edge list: {0}
    InvalidPath(String),
}

impl std::error::Error for Error {}
