pub mod ilp;

/// Handle of a binary decision variable inside a [`BinaryProgram`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(usize);

impl VarId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Right-hand side of a [`LinearEquality`].
#[derive(Clone, Debug, PartialEq)]
pub enum Rhs {
    Constant(f64),
    Sum(Vec<VarId>),
}

/// `sum(lhs) == rhs`, all coefficients being one.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearEquality {
    pub name: String,
    pub lhs: Vec<VarId>,
    pub rhs: Rhs,
}

/// A minimization problem over 0/1 variables with linear equality constraints.
#[derive(Clone, Debug, Default)]
pub struct BinaryProgram {
    variables: Vec<String>,
    constraints: Vec<LinearEquality>,
    objective: Vec<(VarId, f64)>,
}

impl BinaryProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, name: impl Into<String>) -> VarId {
        self.variables.push(name.into());
        VarId(self.variables.len() - 1)
    }

    pub fn add_constraint(&mut self, constraint: LinearEquality) {
        self.constraints.push(constraint);
    }

    pub fn set_objective(&mut self, terms: Vec<(VarId, f64)>) {
        self.objective = terms;
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn constraints(&self) -> &[LinearEquality] {
        &self.constraints
    }

    pub fn objective(&self) -> &[(VarId, f64)] {
        &self.objective
    }

    /// Value of the objective for the given assignment, `None` if a variable has no value.
    pub fn objective_value(&self, values: &[f64]) -> Option<f64> {
        self.objective
            .iter()
            .map(|(v, cost)| values.get(v.index()).map(|x| cost * x))
            .sum()
    }
}

/// What a solver reports back for a [`BinaryProgram`].
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// One value per variable, indexed by [`VarId::index`], and the optimal objective.
    Optimal { values: Vec<f64>, objective: f64 },
    Infeasible,
    /// Unbounded, numerical trouble, limits hit, ...
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variables_are_indexed_in_insertion_order() {
        let mut p = BinaryProgram::new();
        let a = p.add_variable("a");
        let b = p.add_variable("b");
        assert_eq!((a.index(), b.index()), (0, 1));
        assert_eq!(p.variables(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn objective_value_weights_assignment() {
        let mut p = BinaryProgram::new();
        let a = p.add_variable("a");
        let b = p.add_variable("b");
        p.set_objective(vec![(a, 3.0), (b, 4.5)]);
        assert_eq!(p.objective_value(&[1.0, 0.0]), Some(3.0));
        assert_eq!(p.objective_value(&[1.0, 1.0]), Some(7.5));
    }

    #[test]
    fn objective_value_needs_every_variable() {
        let mut p = BinaryProgram::new();
        let a = p.add_variable("a");
        let b = p.add_variable("b");
        p.set_objective(vec![(a, 3.0), (b, 4.5)]);
        assert_eq!(p.objective_value(&[1.0]), None);
    }
}
