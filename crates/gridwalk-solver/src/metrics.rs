//! Per-search counters.
//!
//! [`SearchMetrics`] accumulates from the last public `reset()` of a solver.
//! Forced random-walk restarts do not clear it.

/// Work counters collected while a solver steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchMetrics {
    /// `step()` calls that did work (precondition no-ops are not counted).
    pub steps: u64,
    /// Cells popped from the frontier and expanded (A*) or entered (random
    /// walk).
    pub expansions: u64,
    /// Random walk: forced restarts after hitting the step bound.
    pub restarts: u64,
    /// Random walk: dead-end backtracks.
    pub backtracks: u64,
    /// A*: superseded open-set entries discarded on pop.
    pub stale_entries: u64,
    /// A*: largest open-set size observed.
    pub peak_frontier: usize,
}
