//! Uninformed random walk with backtracking.
//!
//! The walk keeps a stack of cells (`path`) and the set of every cell it has
//! entered since the last restart (`visited`). Each step either pushes a
//! uniformly chosen unvisited neighbour of the stack top, or pops the top at
//! a dead end. After `2 · width · height` steps the walk abandons its run and
//! restarts from the start cell with an empty memory.
//!
//! Termination is probabilistic. On a grid with no path the walk never
//! reaches a terminal status; drivers that need a ceiling impose one.

use gridwalk_core::{Cell, SearchStatus};
use gridwalk_grid::Grid;
use indexmap::IndexSet;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

use crate::metrics::SearchMetrics;
use crate::solver::{Progress, Solver, SolverKind};

/// Randomised depth-first walk.
///
/// Generic over its random source so tests and replays can inject any
/// seedable generator; the default is [`ChaCha8Rng`].
///
/// The RNG is never reseeded by [`reset()`](Solver::reset) or by forced
/// restarts, so each new run explores differently.
///
/// A walk is tied to the dimensions of the grid it was built for: the
/// restart bound comes from that grid's cell count. Stepping it on a grid of
/// another size is a logic error (checked by a debug assertion).
///
/// # Examples
///
/// ```
/// use gridwalk_grid::Grid;
/// use gridwalk_solver::{RandomWalk, Solver};
///
/// let mut grid = Grid::new(4, 4).unwrap();
/// grid.set_start(0, 0);
/// grid.set_end(3, 3);
///
/// let mut walk = RandomWalk::new(&grid, 42);
/// for _ in 0..10_000 {
///     if !walk.step(&grid) {
///         break;
///     }
/// }
/// assert!(walk.is_solved());
/// ```
#[derive(Clone, Debug)]
pub struct RandomWalk<R = ChaCha8Rng> {
    progress: Progress,
    current_steps: usize,
    max_steps: usize,
    cell_count: usize,
    rng: R,
}

impl RandomWalk<ChaCha8Rng> {
    /// Create a walk for `grid` driven by a ChaCha8 generator seeded from
    /// `seed`.
    pub fn new(grid: &Grid, seed: u64) -> Self {
        Self::with_rng(grid, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWalk<R> {
    /// Create a walk for `grid` driven by `rng`.
    ///
    /// The restart bound is derived from the grid's dimensions, which are
    /// fixed for the grid's lifetime.
    pub fn with_rng(grid: &Grid, rng: R) -> Self {
        Self {
            progress: Progress::default(),
            current_steps: 0,
            max_steps: grid.cell_count().saturating_mul(2),
            cell_count: grid.cell_count(),
            rng,
        }
    }

    /// Steps taken in the current run.
    pub fn current_steps(&self) -> usize {
        self.current_steps
    }

    /// Steps after which the current run is abandoned and restarted.
    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Override the restart bound. Values below 1 are raised to 1.
    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps.max(1);
    }

    /// Drop the current run but keep metrics and status.
    fn restart(&mut self) {
        self.progress.visited.clear();
        self.progress.path.clear();
        self.current_steps = 0;
    }

    /// Put `start` on an empty stack and remember it.
    fn seed(&mut self, start: Cell) {
        self.progress.path.push(start);
        self.progress.visited.insert(start);
    }
}

impl<R: Rng> Solver for RandomWalk<R> {
    fn kind(&self) -> SolverKind {
        SolverKind::RandomWalk
    }

    fn reset(&mut self) {
        self.progress.clear();
        self.current_steps = 0;
    }

    fn step(&mut self, grid: &Grid) -> bool {
        debug_assert_eq!(
            grid.cell_count(),
            self.cell_count,
            "random walk stepped on a grid of a different size"
        );
        let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
            return false;
        };
        if self.progress.status.is_terminal() {
            return false;
        }
        self.progress.metrics.steps += 1;

        let Some(&current) = self.progress.path.last() else {
            self.seed(start);
            return true;
        };

        if current == end {
            self.progress.status = SearchStatus::Found;
            return false;
        }

        if self.current_steps >= self.max_steps {
            self.restart();
            self.seed(start);
            self.progress.metrics.restarts += 1;
            return true;
        }

        let unvisited: SmallVec<[Cell; 4]> = grid
            .neighbors(current.x, current.y)
            .into_iter()
            .filter(|n| !self.progress.visited.contains(n))
            .collect();

        if unvisited.is_empty() {
            self.progress.path.pop();
            self.progress.metrics.backtracks += 1;
            if self.progress.path.is_empty() {
                // Back at square one, but keep the memory of explored cells.
                self.seed(start);
            }
        } else {
            let next = unvisited[self.rng.random_range(0..unvisited.len())];
            self.progress.path.push(next);
            self.progress.visited.insert(next);
            self.progress.metrics.expansions += 1;
        }

        self.current_steps += 1;
        true
    }

    fn status(&self) -> SearchStatus {
        self.progress.status
    }

    fn visited(&self) -> &IndexSet<Cell> {
        &self.progress.visited
    }

    fn path(&self) -> &[Cell] {
        &self.progress.path
    }

    fn metrics(&self) -> &SearchMetrics {
        &self.progress.metrics
    }
}
