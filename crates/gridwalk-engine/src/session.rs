//! The [`Session`] driver: user intents in, one solver step per tick out.

use gridwalk_core::{Cell, SearchStatus};
use gridwalk_grid::Grid;
use gridwalk_solver::{AnySolver, Solver, SolverKind};
use tracing::{debug, info, info_span, warn, Span};

use crate::config::{ConfigError, SessionConfig};
use crate::view::CellView;

// ── Outcome types ──────────────────────────────────────────────────

/// What a wall stroke does to every cell it crosses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StrokeMode {
    /// Turn open cells into walls.
    Paint,
    /// Turn walls back into open cells.
    Erase,
}

/// Result of [`Session::place_endpoint()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointChange {
    /// The start marker was placed.
    StartSet(Cell),
    /// The end marker was placed.
    EndSet(Cell),
    /// Both markers existed: they were cleared and a new start placed.
    Restarted {
        /// Start marker before the click.
        previous_start: Cell,
        /// End marker before the click.
        previous_end: Cell,
        /// The new start, or `None` if the clicked cell could not hold it.
        start: Option<Cell>,
    },
    /// The cell is out of bounds, a wall, or the other endpoint.
    Rejected,
}

/// Result of one [`Session::tick()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not solving; nothing happened.
    Idle,
    /// The solver did one unit of work and wants more.
    Advanced,
    /// The solver reached the end cell. Solving stopped.
    Found,
    /// The solver proved the end unreachable. Solving stopped.
    Exhausted,
    /// The run used up its `step_budget`. Solving stopped.
    BudgetExhausted,
    /// The solver refused to step (the grid lost an endpoint). Solving
    /// stopped.
    Stalled,
}

#[derive(Clone, Copy, Debug)]
struct Stroke {
    mode: StrokeMode,
    last: Cell,
}

// ── Session ────────────────────────────────────────────────────────

/// One interactive maze-editing and solving session.
///
/// Owns the grid and exactly one active solver. All methods are
/// synchronous; [`tick()`](Self::tick) is meant to be called once per frame.
///
/// # Examples
///
/// ```
/// use gridwalk_engine::{Session, SessionConfig, TickOutcome};
/// use gridwalk_solver::SolverKind;
///
/// let mut session = Session::new(SessionConfig {
///     width: 6,
///     height: 4,
///     algorithm: SolverKind::AStar,
///     ..SessionConfig::default()
/// })
/// .unwrap();
///
/// session.place_endpoint(0, 0);
/// session.place_endpoint(5, 3);
/// assert!(session.toggle_solving());
///
/// let mut outcome = session.tick();
/// while outcome == TickOutcome::Advanced {
///     outcome = session.tick();
/// }
/// assert_eq!(outcome, TickOutcome::Found);
/// assert!(!session.is_solving());
/// ```
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    grid: Grid,
    solver: AnySolver,
    solving: bool,
    stroke: Option<Stroke>,
    run_ticks: u64,
    span: Span,
}

impl Session {
    /// Validate `config` and build an empty session.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let solver = AnySolver::new(config.algorithm, &grid, config.seed);
        let span = info_span!(
            "session",
            width = config.width,
            height = config.height,
            seed = config.seed,
        );
        span.in_scope(|| info!(algorithm = %config.algorithm, "session created"));
        Ok(Self {
            config,
            grid,
            solver,
            solving: false,
            stroke: None,
            run_ticks: 0,
            span,
        })
    }

    /// The configuration this session was built from.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The maze.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct grid access for callers that edit outside of strokes and
    /// endpoint clicks. Reset or restart solving after editing.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The active solver.
    pub fn solver(&self) -> &AnySolver {
        &self.solver
    }

    /// Strategy of the active solver.
    pub fn algorithm(&self) -> SolverKind {
        self.solver.kind()
    }

    /// Whether [`tick()`](Self::tick) currently advances the solver.
    pub fn is_solving(&self) -> bool {
        self.solving
    }

    /// Mode of the stroke in progress, if any.
    pub fn stroke_mode(&self) -> Option<StrokeMode> {
        self.stroke.map(|s| s.mode)
    }

    /// Ticks spent in the current (or last) solving run.
    pub fn run_ticks(&self) -> u64 {
        self.run_ticks
    }

    // ── Wall strokes ───────────────────────────────────────────

    /// Start a wall stroke at `(x, y)`.
    ///
    /// The stroke erases if the first cell is a wall and paints otherwise.
    /// Returns `None` (and starts nothing) when `(x, y)` is out of bounds.
    pub fn begin_stroke(&mut self, x: i32, y: i32) -> Option<StrokeMode> {
        if !self.grid.contains(x, y) {
            return None;
        }
        let _entered = self.span.clone().entered();
        let mode = if self.grid.is_wall(x, y) {
            StrokeMode::Erase
        } else {
            StrokeMode::Paint
        };
        let cell = Cell::new(x, y);
        self.apply_stroke(mode, cell);
        self.stroke = Some(Stroke { mode, last: cell });
        debug!(?mode, %cell, "stroke started");
        Some(mode)
    }

    /// Extend the current stroke to `(x, y)`.
    ///
    /// Returns whether the grid accepted the edit (painting over an endpoint
    /// is refused). Repeats of the last cell, cells outside the grid, and
    /// calls without a stroke in progress are ignored and return `false`.
    pub fn continue_stroke(&mut self, x: i32, y: i32) -> bool {
        let Some(stroke) = self.stroke else {
            return false;
        };
        let cell = Cell::new(x, y);
        if cell == stroke.last || !self.grid.contains(x, y) {
            return false;
        }
        self.stroke = Some(Stroke { last: cell, ..stroke });
        self.apply_stroke(stroke.mode, cell)
    }

    /// Finish the current stroke, returning its mode.
    pub fn end_stroke(&mut self) -> Option<StrokeMode> {
        let stroke = self.stroke.take()?;
        let _entered = self.span.clone().entered();
        debug!(mode = ?stroke.mode, walls = self.grid.wall_count(), "stroke finished");
        Some(stroke.mode)
    }

    fn apply_stroke(&mut self, mode: StrokeMode, cell: Cell) -> bool {
        match mode {
            StrokeMode::Paint => self.grid.set_wall(cell.x, cell.y),
            StrokeMode::Erase => self.grid.remove_wall(cell.x, cell.y),
        }
    }

    // ── Endpoints ──────────────────────────────────────────────

    /// Place the next endpoint at `(x, y)`.
    ///
    /// The first click sets the start, the second the end. Once both exist,
    /// a click clears both and sets a fresh start.
    pub fn place_endpoint(&mut self, x: i32, y: i32) -> EndpointChange {
        let _entered = self.span.clone().entered();
        let cell = Cell::new(x, y);
        let change = match (self.grid.start(), self.grid.end()) {
            (None, _) => {
                if self.grid.set_start(x, y) {
                    EndpointChange::StartSet(cell)
                } else {
                    EndpointChange::Rejected
                }
            }
            (Some(_), None) => {
                if self.grid.set_end(x, y) {
                    EndpointChange::EndSet(cell)
                } else {
                    EndpointChange::Rejected
                }
            }
            (Some(previous_start), Some(previous_end)) => {
                self.grid.clear_start();
                self.grid.clear_end();
                let start = self.grid.set_start(x, y).then_some(cell);
                EndpointChange::Restarted {
                    previous_start,
                    previous_end,
                    start,
                }
            }
        };
        match change {
            EndpointChange::Rejected => debug!(%cell, "endpoint rejected"),
            _ => info!(?change, "endpoint placed"),
        }
        change
    }

    // ── Solving ────────────────────────────────────────────────

    /// Start or stop solving. Returns the new solving state.
    ///
    /// Starting requires both endpoints; without them a warning is logged
    /// and the session stays idle. Starting always resets the active solver.
    pub fn toggle_solving(&mut self) -> bool {
        let _entered = self.span.clone().entered();
        if self.solving {
            self.solving = false;
            info!(ticks = self.run_ticks, "solving paused");
            return false;
        }
        if !self.grid.is_complete() {
            warn!("cannot start solving: place both a start and an end first");
            return false;
        }
        self.solver.reset();
        self.run_ticks = 0;
        self.solving = true;
        info!(algorithm = %self.solver.kind(), "solving started");
        true
    }

    /// Replace the active solver with a fresh `kind` solver and stop solving.
    pub fn set_algorithm(&mut self, kind: SolverKind) {
        let _entered = self.span.clone().entered();
        self.solver = AnySolver::new(kind, &self.grid, self.config.seed);
        self.solver.reset();
        self.solving = false;
        self.run_ticks = 0;
        info!(algorithm = %kind, "algorithm selected");
    }

    /// Switch to the other strategy. Returns the new one.
    pub fn toggle_algorithm(&mut self) -> SolverKind {
        let kind = self.algorithm().toggled();
        self.set_algorithm(kind);
        kind
    }

    /// Clear walls and endpoints, reset the solver, and stop solving.
    pub fn reset(&mut self) {
        let _entered = self.span.clone().entered();
        self.grid.reset();
        self.solver.reset();
        self.solving = false;
        self.stroke = None;
        self.run_ticks = 0;
        info!("session reset");
    }

    /// Advance the active solver by one step if solving.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.solving {
            return TickOutcome::Idle;
        }
        let _entered = self.span.clone().entered();

        if let Some(budget) = self.config.step_budget {
            if self.run_ticks >= budget {
                self.solving = false;
                warn!(budget, algorithm = %self.solver.kind(), "step budget exhausted");
                return TickOutcome::BudgetExhausted;
            }
        }

        self.run_ticks += 1;
        if self.solver.step(&self.grid) {
            return TickOutcome::Advanced;
        }

        self.solving = false;
        let metrics = self.solver.metrics();
        match self.solver.status() {
            SearchStatus::Found => {
                info!(
                    algorithm = %self.solver.kind(),
                    path_len = self.solver.path().len(),
                    visited = self.solver.visited().len(),
                    steps = metrics.steps,
                    "solution found"
                );
                TickOutcome::Found
            }
            SearchStatus::Exhausted => {
                info!(
                    algorithm = %self.solver.kind(),
                    visited = self.solver.visited().len(),
                    steps = metrics.steps,
                    "no path exists"
                );
                TickOutcome::Exhausted
            }
            SearchStatus::Running => {
                warn!("solver stopped without a result; the grid is incomplete");
                TickOutcome::Stalled
            }
        }
    }

    // ── View ───────────────────────────────────────────────────

    /// How the cell at `(x, y)` should be drawn.
    ///
    /// Endpoints win over path cells, path cells over walls, walls over
    /// visited cells. Out-of-bounds coordinates report [`CellView::Wall`].
    pub fn cell_view(&self, x: i32, y: i32) -> CellView {
        let cell = Cell::new(x, y);
        if self.grid.start() == Some(cell) {
            CellView::Start
        } else if self.grid.end() == Some(cell) {
            CellView::End
        } else if self.solver.path().contains(&cell) {
            CellView::Path
        } else if self.grid.is_wall(x, y) {
            CellView::Wall
        } else if self.solver.visited().contains(&cell) {
            CellView::Visited
        } else {
            CellView::Empty
        }
    }

    /// The whole grid as text, one line per row, using
    /// [`CellView::glyph()`].
    pub fn render_ascii(&self) -> String {
        let width = self.grid.width() as usize;
        let height = self.grid.height() as usize;
        let mut out = String::with_capacity((width + 1) * height);
        for y in 0..self.grid.height() as i32 {
            for x in 0..self.grid.width() as i32 {
                out.push(self.cell_view(x, y).glyph());
            }
            out.push('\n');
        }
        out
    }
}
