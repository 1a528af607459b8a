use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A weighted, directed edge of the input graph.
pub trait Edge {
    type NodeId;

    fn source(&self) -> &Self::NodeId;
    fn target(&self) -> &Self::NodeId;
    fn cost(&self) -> f64;
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(
    try_from = "RawEdge<NodeId, f64>",
    bound(deserialize = "NodeId: Deserialize<'de>")
)]
pub struct SimpleEdge<NodeId> {
    source: NodeId,
    target: NodeId,
    cost: f64,
}

impl<NodeId> SimpleEdge<NodeId> {
    pub fn new<C: ToPrimitive>(source: NodeId, target: NodeId, cost: C) -> Result<Self, Error> {
        let cost = cost.to_f64().ok_or(Error::NonNumericCost)?;
        if !cost.is_finite() {
            return Err(Error::NonFiniteCost(cost));
        }

        Ok(Self {
            source,
            target,
            cost,
        })
    }
}

impl<NodeId: Clone> SimpleEdge<NodeId> {
    /// The same edge traversed the other way round, at the same cost.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            cost: self.cost,
        }
    }
}

impl<NodeId> Edge for SimpleEdge<NodeId> {
    type NodeId = NodeId;

    fn source(&self) -> &Self::NodeId {
        &self.source
    }

    fn target(&self) -> &Self::NodeId {
        &self.target
    }

    fn cost(&self) -> f64 {
        self.cost
    }
}

/// An unchecked edge, as read from an input file.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RawEdge<NodeId, Cost> {
    pub source: NodeId,
    pub target: NodeId,
    pub cost: Cost,
}

impl<NodeId, Cost> TryFrom<RawEdge<NodeId, Cost>> for SimpleEdge<NodeId>
where
    Cost: ToPrimitive,
{
    type Error = Error;

    fn try_from(e: RawEdge<NodeId, Cost>) -> Result<Self, Self::Error> {
        Self::new(e.source, e.target, e.cost)
    }
}

impl<NodeId> From<SimpleEdge<NodeId>> for RawEdge<NodeId, f64> {
    fn from(e: SimpleEdge<NodeId>) -> Self {
        Self {
            source: e.source,
            target: e.target,
            cost: e.cost,
        }
    }
}
