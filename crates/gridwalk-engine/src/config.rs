//! Session configuration, validation, and error types.

use std::error::Error;
use std::fmt;

use gridwalk_core::GridError;
use gridwalk_grid::Grid;
use gridwalk_solver::SolverKind;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SessionConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The grid dimensions are unusable.
    Grid(GridError),
    /// `step_budget` is `Some(0)`, which would stop every run before its
    /// first step.
    ZeroStepBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::ZeroStepBudget => write!(f, "step_budget must be at least 1 when set"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::ZeroStepBudget => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── SessionConfig ──────────────────────────────────────────────────

/// Construction parameters for a [`Session`](crate::Session).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Grid columns. Default: 40.
    pub width: u32,
    /// Grid rows. Default: 30.
    pub height: u32,
    /// Seed for the random walk's RNG. Default: 0.
    pub seed: u64,
    /// Strategy active when the session starts. Default: random walk.
    pub algorithm: SolverKind,
    /// Hard ceiling on solver steps per solving run. `None` = unbounded.
    ///
    /// The random walk never gives up on an unsolvable grid; this is the
    /// driver-side limit for it.
    pub step_budget: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 30,
            seed: 0,
            algorithm: SolverKind::RandomWalk,
            step_budget: None,
        }
    }
}

impl SessionConfig {
    /// Check structural invariants without allocating a grid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            if value > Grid::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: Grid::MAX_DIM,
                }
                .into());
            }
        }
        if self.step_budget == Some(0) {
            return Err(ConfigError::ZeroStepBudget);
        }
        Ok(())
    }
}
