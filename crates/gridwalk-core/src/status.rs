//! Search progress reported by a solver.

use std::fmt;

/// Where a solver's search currently stands.
///
/// `Found` and `Exhausted` are both terminal: once reached, further calls to
/// `step()` are no-ops until the solver is reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SearchStatus {
    /// The search has not reached a terminal state.
    #[default]
    Running,
    /// The goal was reached; the solver's path leads from start to end.
    Found,
    /// Every reachable cell was explored without reaching the goal.
    Exhausted,
}

impl SearchStatus {
    /// Whether no further progress is possible without a reset.
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchStatus::Running)
    }
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Found => write!(f, "found"),
            Self::Exhausted => write!(f, "exhausted"),
        }
    }
}
