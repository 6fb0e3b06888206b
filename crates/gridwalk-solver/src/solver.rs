//! The [`Solver`] trait, the [`SolverKind`] tag and enum dispatch via
//! [`AnySolver`].

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use gridwalk_core::{Cell, SearchStatus};
use gridwalk_grid::Grid;
use indexmap::IndexSet;

use crate::astar::AStar;
use crate::metrics::SearchMetrics;
use crate::random_walk::RandomWalk;

/// An incremental maze solver.
///
/// # Contract
///
/// - [`step()`](Solver::step) performs one bounded unit of work and returns
///   `true` while another call is useful. It is a no-op returning `false`
///   when the grid is incomplete (no start or no end) or the status is
///   already terminal.
/// - [`reset()`](Solver::reset) clears visited cells, path, status,
///   metrics and every algorithm-private structure. Calling it twice is the
///   same as calling it once.
/// - The grid is borrowed per call. Mutating it between steps of one search
///   gives unspecified (but memory-safe) results; reset after editing.
///
/// # Examples
///
/// ```
/// use gridwalk_core::SearchStatus;
/// use gridwalk_grid::Grid;
/// use gridwalk_solver::{AStar, Solver};
///
/// let mut grid = Grid::new(3, 3).unwrap();
/// grid.set_start(0, 0);
/// grid.set_end(2, 2);
///
/// let mut solver = AStar::new();
/// while solver.step(&grid) {}
/// assert_eq!(solver.status(), SearchStatus::Found);
/// assert_eq!(solver.path().len(), 5);
/// ```
pub trait Solver {
    /// Which strategy this is.
    fn kind(&self) -> SolverKind;

    /// Discard all progress.
    fn reset(&mut self);

    /// Advance the search by one unit of work.
    fn step(&mut self, grid: &Grid) -> bool;

    /// Current search status.
    fn status(&self) -> SearchStatus;

    /// Cells explored so far, in discovery order.
    fn visited(&self) -> &IndexSet<Cell>;

    /// Current route, front-to-back from the start cell.
    ///
    /// For the random walk this is the live walk; for A* it is empty until
    /// the goal is reached.
    fn path(&self) -> &[Cell];

    /// Work counters since the last reset.
    fn metrics(&self) -> &SearchMetrics;

    /// Whether the goal has been reached.
    fn is_solved(&self) -> bool {
        self.status() == SearchStatus::Found
    }
}

/// Progress shared by every strategy.
#[derive(Clone, Debug, Default)]
pub(crate) struct Progress {
    pub(crate) visited: IndexSet<Cell>,
    pub(crate) path: Vec<Cell>,
    pub(crate) status: SearchStatus,
    pub(crate) metrics: SearchMetrics,
}

impl Progress {
    pub(crate) fn clear(&mut self) {
        self.visited.clear();
        self.path.clear();
        self.status = SearchStatus::Running;
        self.metrics = SearchMetrics::default();
    }
}

// ── SolverKind ──────────────────────────────────────────────────

/// Names a solving strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SolverKind {
    /// [`RandomWalk`].
    #[default]
    RandomWalk,
    /// [`AStar`].
    AStar,
}

impl SolverKind {
    /// Every strategy, in toggle order.
    pub const ALL: [SolverKind; 2] = [SolverKind::RandomWalk, SolverKind::AStar];

    /// Stable identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SolverKind::RandomWalk => "random_walk",
            SolverKind::AStar => "astar",
        }
    }

    /// The other strategy.
    pub fn toggled(self) -> Self {
        match self {
            SolverKind::RandomWalk => SolverKind::AStar,
            SolverKind::AStar => SolverKind::RandomWalk,
        }
    }
}

impl fmt::Display for SolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing an unknown [`SolverKind`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseSolverKindError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for ParseSolverKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown solver '{}', expected 'random_walk' or 'astar'",
            self.input
        )
    }
}

impl Error for ParseSolverKindError {}

impl FromStr for SolverKind {
    type Err = ParseSolverKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "random_walk" | "random-walk" | "randomwalk" => Ok(SolverKind::RandomWalk),
            "astar" | "a*" | "a-star" => Ok(SolverKind::AStar),
            _ => Err(ParseSolverKindError {
                input: s.to_string(),
            }),
        }
    }
}

// ── AnySolver ───────────────────────────────────────────────────

/// One of the built-in strategies, dispatched by `match`.
#[derive(Clone, Debug)]
pub enum AnySolver {
    /// A seeded [`RandomWalk`].
    RandomWalk(RandomWalk),
    /// An [`AStar`] search.
    AStar(AStar),
}

impl AnySolver {
    /// Build a fresh solver of `kind` for `grid`.
    ///
    /// `seed` feeds the random walk's RNG and is ignored by A*.
    pub fn new(kind: SolverKind, grid: &Grid, seed: u64) -> Self {
        match kind {
            SolverKind::RandomWalk => AnySolver::RandomWalk(RandomWalk::new(grid, seed)),
            SolverKind::AStar => AnySolver::AStar(AStar::new()),
        }
    }
}

impl From<RandomWalk> for AnySolver {
    fn from(s: RandomWalk) -> Self {
        AnySolver::RandomWalk(s)
    }
}

impl From<AStar> for AnySolver {
    fn from(s: AStar) -> Self {
        AnySolver::AStar(s)
    }
}

/// Forward a trait method to whichever strategy is active.
macro_rules! dispatch {
    ($self:ident, $s:ident => $call:expr) => {
        match $self {
            AnySolver::RandomWalk($s) => $call,
            AnySolver::AStar($s) => $call,
        }
    };
}

impl Solver for AnySolver {
    fn kind(&self) -> SolverKind {
        dispatch!(self, s => s.kind())
    }

    fn reset(&mut self) {
        dispatch!(self, s => s.reset())
    }

    fn step(&mut self, grid: &Grid) -> bool {
        dispatch!(self, s => s.step(grid))
    }

    fn status(&self) -> SearchStatus {
        dispatch!(self, s => s.status())
    }

    fn visited(&self) -> &IndexSet<Cell> {
        dispatch!(self, s => s.visited())
    }

    fn path(&self) -> &[Cell] {
        dispatch!(self, s => s.path())
    }

    fn metrics(&self) -> &SearchMetrics {
        dispatch!(self, s => s.metrics())
    }
}
