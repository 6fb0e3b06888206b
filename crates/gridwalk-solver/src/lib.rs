//! Steppable maze solvers.
//!
//! Every solver implements the [`Solver`] trait: [`reset()`](Solver::reset)
//! clears its progress and [`step()`](Solver::step) performs one bounded unit
//! of work against a borrowed [`Grid`](gridwalk_grid::Grid), returning
//! `true` while another call would make progress. This makes a solver
//! suitable for being driven once per rendered frame, or once per assertion
//! in a test.
//!
//! # Strategies
//!
//! - [`RandomWalk`]: uninformed depth-first random walk with backtracking and
//!   forced restarts. Reproducible through an injected seedable RNG.
//! - [`AStar`]: best-first search with a Manhattan heuristic; finds a
//!   shortest path whenever one exists and reports
//!   [`SearchStatus::Exhausted`](gridwalk_core::SearchStatus::Exhausted)
//!   otherwise.
//!
//! [`SolverKind`] names the strategies and [`AnySolver`] dispatches over
//! them without boxing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod astar;
pub mod metrics;
pub mod random_walk;
pub mod solver;

pub use astar::AStar;
pub use metrics::SearchMetrics;
pub use random_walk::RandomWalk;
pub use solver::{AnySolver, ParseSolverKindError, Solver, SolverKind};
