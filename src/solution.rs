use serde::{Deserialize, Serialize};

/// The result of a shortest path query.
///
/// `path` and `cost` are present if and only if `possible` is set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution<NodeId> {
    possible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<Vec<NodeId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<f64>,
}

impl<NodeId> Solution<NodeId> {
    pub fn infeasible() -> Self {
        Self {
            possible: false,
            path: None,
            cost: None,
        }
    }

    pub fn found(path: Vec<NodeId>, cost: f64) -> Self {
        Self {
            possible: true,
            path: Some(path),
            cost: Some(cost),
        }
    }

    pub fn is_possible(&self) -> bool {
        self.possible
    }

    pub fn path(&self) -> Option<&[NodeId]> {
        self.path.as_deref()
    }

    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn into_path(self) -> Option<Vec<NodeId>> {
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infeasible_carries_no_path() {
        let s = Solution::<u64>::infeasible();
        assert!(!s.is_possible());
        assert_eq!(s.path(), None);
        assert_eq!(s.cost(), None);
    }

    #[test]
    fn found_carries_path_and_cost() {
        let s = Solution::found(vec![1, 2, 3], 10.0);
        assert!(s.is_possible());
        assert_eq!(s.path(), Some(&[1, 2, 3][..]));
        assert_eq!(s.cost(), Some(10.0));
        assert_eq!(s.into_path(), Some(vec![1, 2, 3]));
    }
}
