//! Behavioural properties of the two solvers, checked against a
//! breadth-first oracle on small grids.

use gridwalk_core::{Cell, SearchStatus};
use gridwalk_grid::Grid;
use gridwalk_solver::{AStar, AnySolver, RandomWalk, Solver, SolverKind};
use gridwalk_test_utils::{bfs_path_len, grid_from_ascii, run_to_completion, wall_column, MAZE_5X5};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────

/// Assert that `path` is a chain of adjacent open cells with no immediate
/// repeats.
fn assert_walkable(grid: &Grid, path: &[Cell]) {
    for cell in path {
        assert!(!grid.is_wall(cell.x, cell.y), "path crosses wall at {cell}");
    }
    for pair in path.windows(2) {
        assert_ne!(pair[0], pair[1], "consecutive repeat of {}", pair[0]);
        assert!(
            pair[0].is_adjacent(pair[1]),
            "{} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

fn grid_with_walls(walls: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new(5, 5).unwrap();
    grid.set_start(0, 0);
    grid.set_end(4, 4);
    for &(x, y) in walls {
        grid.set_wall(x, y);
    }
    grid
}

// ── A* ──────────────────────────────────────────────────────────

#[test]
fn astar_open_3x3_scenario() {
    let mut grid = Grid::new(3, 3).unwrap();
    grid.set_start(0, 0);
    grid.set_end(2, 2);

    let mut astar = AStar::new();
    run_to_completion(&mut astar, &grid, 100);
    assert_eq!(astar.status(), SearchStatus::Found);
    assert!(astar.metrics().expansions <= 9);
    assert_eq!(astar.path().len(), 5);
}

#[test]
fn astar_matches_bfs_on_fixed_maze() {
    let grid = grid_from_ascii(MAZE_5X5);
    let mut astar = AStar::new();
    run_to_completion(&mut astar, &grid, 1_000);
    assert!(astar.is_solved());
    assert_eq!(Some(astar.path().len()), bfs_path_len(&grid));
    assert_eq!(astar.path().first().copied(), grid.start());
    assert_eq!(astar.path().last().copied(), grid.end());
    assert_walkable(&grid, astar.path());
}

#[test]
fn astar_is_deterministic() {
    let grid = grid_from_ascii(MAZE_5X5);
    let mut first = AStar::new();
    let mut second = AStar::new();
    run_to_completion(&mut first, &grid, 1_000);
    run_to_completion(&mut second, &grid, 1_000);
    assert_eq!(first.path(), second.path());
    assert_eq!(first.visited().len(), second.visited().len());
    assert_eq!(first.metrics(), second.metrics());
}

#[test]
fn astar_reports_exhaustion_behind_full_wall() {
    let mut grid = grid_from_ascii(
        "
        S....
        .....
        .....
        ....E
        ",
    );
    wall_column(&mut grid, 2);
    let cells = grid.cell_count();

    let mut astar = AStar::new();
    let advanced = run_to_completion(&mut astar, &grid, cells + 1);
    assert!(advanced <= cells);
    assert_eq!(astar.status(), SearchStatus::Exhausted);
    assert!(!astar.is_solved());
    assert_eq!(astar.open_set_len(), 0);
    assert!(astar.path().is_empty());
    // Only the two columns left of the wall are explored.
    assert_eq!(astar.visited().len(), 8);
    assert!(!astar.step(&grid));
}

#[test]
fn astar_start_adjacent_to_end() {
    let mut grid = Grid::new(2, 1).unwrap();
    grid.set_start(0, 0);
    grid.set_end(1, 0);
    let mut astar = AStar::new();
    run_to_completion(&mut astar, &grid, 10);
    assert_eq!(astar.path(), &[Cell::new(0, 0), Cell::new(1, 0)]);
}

#[test]
fn astar_after_reset_on_edited_grid() {
    let mut grid = grid_from_ascii(MAZE_5X5);
    let mut astar = AStar::new();
    run_to_completion(&mut astar, &grid, 1_000);
    assert!(astar.is_solved());

    // Cut the only route and search again.
    grid.set_wall(2, 0);
    astar.reset();
    run_to_completion(&mut astar, &grid, 1_000);
    assert_eq!(astar.status(), SearchStatus::Exhausted);
}

// ── Random walk ─────────────────────────────────────────────────

#[test]
fn random_walk_solves_fixed_maze() {
    let grid = grid_from_ascii(MAZE_5X5);
    let mut walk = RandomWalk::new(&grid, 2024);
    run_to_completion(&mut walk, &grid, 100_000);
    assert!(walk.is_solved());
    assert_eq!(walk.path().first().copied(), grid.start());
    assert_eq!(walk.path().last().copied(), grid.end());
    assert_walkable(&grid, walk.path());
}

#[test]
fn random_walk_never_terminates_without_a_route() {
    let mut grid = grid_from_ascii(
        "
        S..
        ...
        ..E
        ",
    );
    wall_column(&mut grid, 1);
    let mut walk = RandomWalk::new(&grid, 5);
    let advanced = run_to_completion(&mut walk, &grid, 500);
    assert_eq!(advanced, 500);
    assert_eq!(walk.status(), SearchStatus::Running);
    assert!(walk.metrics().restarts > 0);
    assert!(walk.metrics().backtracks > 0);
}

#[test]
fn random_walk_same_seed_same_walk() {
    let grid = grid_with_walls(&[(1, 1), (2, 2), (3, 1)]);
    let mut a = RandomWalk::new(&grid, 77);
    let mut b = RandomWalk::new(&grid, 77);
    for _ in 0..200 {
        let ra = a.step(&grid);
        let rb = b.step(&grid);
        assert_eq!(ra, rb);
        assert_eq!(a.path(), b.path());
        assert_eq!(a.visited(), b.visited());
    }
}

// ── Enum dispatch ───────────────────────────────────────────────

#[test]
fn switching_strategies_resets_the_new_one() {
    let grid = grid_from_ascii(MAZE_5X5);
    let mut active = AnySolver::new(SolverKind::RandomWalk, &grid, 1);
    for _ in 0..5 {
        active.step(&grid);
    }
    assert!(!active.visited().is_empty());

    active = AnySolver::new(active.kind().toggled(), &grid, 1);
    active.reset();
    assert_eq!(active.kind(), SolverKind::AStar);
    assert!(active.visited().is_empty());
    run_to_completion(&mut active, &grid, 1_000);
    assert_eq!(Some(active.path().len()), bfs_path_len(&grid));
}

// ── Property tests ──────────────────────────────────────────────

fn wall_set() -> impl Strategy<Value = Vec<(i32, i32)>> {
    proptest::collection::vec((0i32..5, 0i32..5), 0..12)
}

proptest! {
    #[test]
    fn astar_path_length_matches_bfs(walls in wall_set()) {
        let grid = grid_with_walls(&walls);
        let mut astar = AStar::new();
        run_to_completion(&mut astar, &grid, grid.cell_count() + 2);
        match bfs_path_len(&grid) {
            Some(len) => {
                prop_assert_eq!(astar.status(), SearchStatus::Found);
                prop_assert_eq!(astar.path().len(), len);
                assert_walkable(&grid, astar.path());
            }
            None => {
                prop_assert_eq!(astar.status(), SearchStatus::Exhausted);
                prop_assert!(astar.path().is_empty());
            }
        }
    }

    #[test]
    fn random_walk_path_stays_walkable(walls in wall_set(), seed in any::<u64>()) {
        let grid = grid_with_walls(&walls);
        let mut walk = RandomWalk::new(&grid, seed);
        for _ in 0..300 {
            let more = walk.step(&grid);
            assert_walkable(&grid, walk.path());
            prop_assert_eq!(walk.path().first().copied(), grid.start());
            if !more {
                break;
            }
        }
    }

    #[test]
    fn random_walk_is_reproducible(seed in any::<u64>()) {
        let grid = grid_from_ascii(MAZE_5X5);
        let mut a = RandomWalk::new(&grid, seed);
        let mut b = RandomWalk::new(&grid, seed);
        let steps_a = run_to_completion(&mut a, &grid, 2_000);
        let steps_b = run_to_completion(&mut b, &grid, 2_000);
        prop_assert_eq!(steps_a, steps_b);
        prop_assert_eq!(a.path(), b.path());
        prop_assert_eq!(a.visited().len(), b.visited().len());
    }
}
