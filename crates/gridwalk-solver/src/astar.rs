//! Incremental A* over unit-cost 4-connected grids.
//!
//! The heuristic is Manhattan distance to the end cell, which is admissible
//! and consistent on this topology, so the first time a cell is expanded its
//! cost is final and the path found is a shortest one (in cells).
//!
//! # Open set
//!
//! A binary min-heap ordered by `(f, seq)` where `seq` is a monotonically
//! increasing insertion counter: equal `f` values pop in FIFO order, which
//! together with the fixed neighbour order makes every run deterministic.
//!
//! Improvements are pushed as new entries rather than updating the old ones
//! in place. Superseded entries are recognised on pop (their cell is already
//! expanded) and discarded within the same step.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use gridwalk_core::{Cell, SearchStatus};
use gridwalk_grid::Grid;
use indexmap::IndexSet;

use crate::metrics::SearchMetrics;
use crate::solver::{Progress, Solver, SolverKind};

/// One open-set entry. Ordered so that `BinaryHeap` pops the lowest `f`,
/// then the lowest `seq`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenEntry {
    f: u32,
    seq: u64,
    g: u32,
    cell: Cell,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Steppable A* search.
///
/// The first [`step()`](Solver::step) seeds the open set with the start
/// cell; each later step expands exactly one cell. The search ends with
/// [`SearchStatus::Found`] once the end cell is expanded, or
/// [`SearchStatus::Exhausted`] when the open set runs dry.
///
/// [`visited()`](Solver::visited) holds the expanded cells in expansion
/// order. [`path()`](Solver::path) stays empty until the goal is found.
#[derive(Clone, Debug, Default)]
pub struct AStar {
    progress: Progress,
    open_set: BinaryHeap<OpenEntry>,
    came_from: HashMap<Cell, Cell>,
    g_score: HashMap<Cell, u32>,
    counter: u64,
    seeded: bool,
}

impl AStar {
    /// Create an idle search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Manhattan distance from `cell` to `goal`.
    pub fn heuristic(cell: Cell, goal: Cell) -> u32 {
        cell.manhattan(goal)
    }

    /// Best known cost from the start to `cell`, or `None` if undiscovered.
    pub fn g_score(&self, cell: Cell) -> Option<u32> {
        self.g_score.get(&cell).copied()
    }

    /// `g_score + heuristic` for `cell`, computed on demand against the
    /// grid's current end cell.
    pub fn f_score(&self, cell: Cell, grid: &Grid) -> Option<u32> {
        let goal = grid.end()?;
        let g = self.g_score(cell)?;
        Some(g.saturating_add(Self::heuristic(cell, goal)))
    }

    /// Predecessor of `cell` on its best known route.
    pub fn came_from(&self, cell: Cell) -> Option<Cell> {
        self.came_from.get(&cell).copied()
    }

    /// Entries currently in the open set, including superseded ones.
    pub fn open_set_len(&self) -> usize {
        self.open_set.len()
    }

    fn push(&mut self, cell: Cell, g: u32, goal: Cell) {
        self.open_set.push(OpenEntry {
            f: g.saturating_add(Self::heuristic(cell, goal)),
            seq: self.counter,
            g,
            cell,
        });
        self.counter += 1;
        let frontier = self.open_set.len();
        let peak = &mut self.progress.metrics.peak_frontier;
        *peak = (*peak).max(frontier);
    }

    /// Pop the cheapest entry whose cell has not been expanded yet.
    fn pop_fresh(&mut self) -> Option<OpenEntry> {
        while let Some(entry) = self.open_set.pop() {
            if self.progress.visited.contains(&entry.cell) {
                self.progress.metrics.stale_entries += 1;
                continue;
            }
            return Some(entry);
        }
        None
    }

    /// Walk `came_from` back from `goal`, returning the route start → goal.
    fn reconstruct_path(&self, goal: Cell) -> Vec<Cell> {
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&prev) = self.came_from.get(&current) {
            path.push(prev);
            current = prev;
        }
        path.reverse();
        path
    }
}

impl Solver for AStar {
    fn kind(&self) -> SolverKind {
        SolverKind::AStar
    }

    fn reset(&mut self) {
        self.progress.clear();
        self.open_set.clear();
        self.came_from.clear();
        self.g_score.clear();
        self.counter = 0;
        self.seeded = false;
    }

    fn step(&mut self, grid: &Grid) -> bool {
        let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
            return false;
        };
        if self.progress.status.is_terminal() {
            return false;
        }
        self.progress.metrics.steps += 1;

        if !self.seeded {
            self.g_score.insert(start, 0);
            self.push(start, 0, end);
            self.seeded = true;
            return true;
        }

        let Some(OpenEntry { g, cell: current, .. }) = self.pop_fresh() else {
            self.progress.status = SearchStatus::Exhausted;
            return false;
        };
        self.progress.visited.insert(current);
        self.progress.metrics.expansions += 1;

        if current == end {
            self.progress.path = self.reconstruct_path(current);
            self.progress.status = SearchStatus::Found;
            return false;
        }

        let tentative = g + 1;
        for next in grid.neighbors(current.x, current.y) {
            let improved = self
                .g_score
                .get(&next)
                .map_or(true, |&known| tentative < known);
            if improved {
                self.came_from.insert(next, current);
                self.g_score.insert(next, tentative);
                self.push(next, tentative, end);
            }
        }
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
