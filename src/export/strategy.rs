//! Solving strategies the solver service understands.

use std::fmt;

/// A solving strategy, sent as the request `label`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverStrategy {
    /// Constraint programming with Z3.
    Csp,
    /// A* search heuristic.
    AStar,
    /// Genetic algorithm.
    Genetic,
}

impl SolverStrategy {
    /// All strategies, in menu order.
    pub const ALL: [SolverStrategy; 3] = [Self::Csp, Self::AStar, Self::Genetic];

    /// The label the solver dispatches on.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Csp => "CSP(using Z3)",
            Self::AStar => "Heuristic(A*)",
            Self::Genetic => "Meta Heuristic(Genetic Algo)",
        }
    }

    /// Parses a solver label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

impl fmt::Display for SolverStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
