//! Gridwalk: a steppable maze-search engine.
//!
//! One dependency that pulls in the grid model, both solvers and the session
//! driver. Each sub-crate is mounted as a module below, and [`prelude`]
//! gathers the names a frame loop usually needs.
//!
//! # Quick start
//!
//! ```rust
//! use gridwalk::prelude::*;
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! for y in 0..4 {
//!     grid.set_wall(2, y);
//! }
//! grid.set_start(0, 0);
//! grid.set_end(4, 0);
//!
//! // Drive the search one step at a time, as a frame loop would.
//! let mut solver = AnySolver::new(SolverKind::AStar, &grid, 0);
//! while solver.step(&grid) {}
//!
//! assert_eq!(solver.status(), SearchStatus::Found);
//! assert_eq!(solver.path().first(), Some(&Cell::new(0, 0)));
//! assert_eq!(solver.path().len(), 13);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `gridwalk-core` | `Cell`, `Direction`, `SearchStatus`, `GridError` |
//! | [`grid`] | `gridwalk-grid` | The editable maze |
//! | [`solver`] | `gridwalk-solver` | `Solver` trait, random walk, A* |
//! | [`engine`] | `gridwalk-engine` | Interactive `Session` driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, search status, and errors (`gridwalk-core`).
pub use gridwalk_core as types;

/// The editable maze (`gridwalk-grid`).
///
/// See [`grid::Grid`] for the mutators and queries solvers rely on.
pub use gridwalk_grid as grid;

/// Incremental solvers (`gridwalk-solver`).
///
/// [`solver::RandomWalk`] and [`solver::AStar`] implement
/// [`solver::Solver`]; [`solver::AnySolver`] picks one at runtime.
pub use gridwalk_solver as solver;

/// Interactive session driver (`gridwalk-engine`).
///
/// [`engine::Session`] maps user intents onto grid edits and solver steps.
pub use gridwalk_engine as engine;

/// Common imports for typical gridwalk usage.
///
/// ```rust
/// use gridwalk::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use gridwalk_core::{Cell, Direction, GridError, SearchStatus};

    // Grid
    pub use gridwalk_grid::Grid;

    // Solvers
    pub use gridwalk_solver::{AStar, AnySolver, RandomWalk, SearchMetrics, Solver, SolverKind};

    // Engine
    pub use gridwalk_engine::{
        CellView, ConfigError, EndpointChange, Session, SessionConfig, StrokeMode, TickOutcome,
    };
}
