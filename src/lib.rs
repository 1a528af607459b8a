#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

pub mod algo;
pub mod decode;
pub mod edge;
pub mod error;
pub mod formulation;
pub mod id;
pub mod impls;
pub mod normalize;
pub mod solution;

pub use crate::algo::ilp::microlp::MicroLp;
#[cfg(feature = "highs")]
pub use crate::algo::ilp::highs::Highs;
pub use crate::algo::ilp::BinaryProgramSolver;
pub use crate::edge::{Edge, RawEdge, SimpleEdge};
pub use crate::error::Error;
pub use crate::id::NodeId;
pub use crate::impls::default::DefaultPathFinder;
pub use crate::solution::Solution;

/// Minimum-cost path search between two nodes of a weighted graph.
pub trait PathFinder {
    type NodeId;
    type Edges;
    type Error;

    /// Find the cheapest path from `start` to `end`. Undirected graphs are searched over both
    /// directions of every edge. An unreachable `end` yields [`Solution::infeasible`], not an
    /// error.
    fn shortest_path(
        &mut self,
        edges: Self::Edges,
        start: Self::NodeId,
        end: Self::NodeId,
        directed: bool,
    ) -> Result<Solution<Self::NodeId>, Self::Error>;

    /// Verify that `solution` runs from `start` to `end` over existing edges and that its cost
    /// adds up.
    fn check(
        &self,
        edges: &Self::Edges,
        start: &Self::NodeId,
        end: &Self::NodeId,
        directed: bool,
        solution: &Solution<Self::NodeId>,
    ) -> Result<(), Self::Error>;
}

/// [`PathFinder::shortest_path`] with the default, pure Rust solver.
pub fn shortest_path<N: NodeId>(
    edges: Vec<SimpleEdge<N>>,
    start: N,
    end: N,
    directed: bool,
) -> Result<Solution<N>, Error> {
    DefaultPathFinder::<N, _>::new(MicroLp).shortest_path(edges, start, end, directed)
}
