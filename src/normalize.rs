use crate::edge::SimpleEdge;

/// Turns the edge list into a directed one.
///
/// Undirected input gets a reversed copy of every edge appended after the originals. Nothing is
/// deduplicated, so an undirected edge given in both directions ends up twice in each direction.
pub fn normalize<NodeId: Clone>(
    mut edges: Vec<SimpleEdge<NodeId>>,
    directed: bool,
) -> Vec<SimpleEdge<NodeId>> {
    if !directed {
        let reversed: Vec<_> = edges.iter().map(SimpleEdge::reversed).collect();
        edges.extend(reversed);
    }
    edges
}
