//! End-to-end driver scenarios: edit a maze, solve it tick by tick.

use gridwalk_core::Cell;
use gridwalk_engine::{CellView, Session, SessionConfig, TickOutcome};
use gridwalk_grid::Grid;
use gridwalk_solver::{Solver, SolverKind};
use gridwalk_test_utils::{bfs_path_len, grid_from_ascii, wall_column, MAZE_5X5};

fn session_for(layout: &Grid, algorithm: SolverKind, step_budget: Option<u64>) -> Session {
    let mut session = Session::new(SessionConfig {
        width: layout.width(),
        height: layout.height(),
        seed: 2024,
        algorithm,
        step_budget,
    })
    .unwrap();
    for wall in layout.walls() {
        assert!(session.grid_mut().set_wall(wall.x, wall.y));
    }
    let start = layout.start().unwrap();
    let end = layout.end().unwrap();
    session.place_endpoint(start.x, start.y);
    session.place_endpoint(end.x, end.y);
    session
}

fn run(session: &mut Session, max_ticks: usize) -> TickOutcome {
    for _ in 0..max_ticks {
        match session.tick() {
            TickOutcome::Advanced => {}
            other => return other,
        }
    }
    TickOutcome::Advanced
}

// ── Solving through the driver ─────────────────────────────────────

#[test]
fn astar_session_finds_the_shortest_route() {
    let maze = grid_from_ascii(MAZE_5X5);
    let mut session = session_for(&maze, SolverKind::AStar, None);
    assert!(session.toggle_solving());
    assert_eq!(run(&mut session, 1_000), TickOutcome::Found);
    assert_eq!(Some(session.solver().path().len()), bfs_path_len(&maze));
    assert!(session.run_ticks() <= maze.cell_count() as u64 + 1);
}

#[test]
fn random_walk_session_finds_a_route() {
    let maze = grid_from_ascii(MAZE_5X5);
    let mut session = session_for(&maze, SolverKind::RandomWalk, None);
    session.toggle_solving();
    assert_eq!(run(&mut session, 100_000), TickOutcome::Found);
    let path = session.solver().path();
    assert_eq!(path.first(), maze.start().as_ref());
    assert_eq!(path.last(), maze.end().as_ref());
}

#[test]
fn step_budget_caps_a_hopeless_random_walk() {
    let mut grid = Grid::new(5, 3).unwrap();
    wall_column(&mut grid, 2);
    grid.set_start(0, 0);
    grid.set_end(4, 2);

    let mut session = session_for(&grid, SolverKind::RandomWalk, Some(500));
    session.toggle_solving();
    assert_eq!(run(&mut session, 10_000), TickOutcome::BudgetExhausted);
    assert_eq!(session.run_ticks(), 500);
    assert!(session.solver().metrics().restarts > 0);
}

#[test]
fn astar_session_reports_exhaustion() {
    let mut grid = Grid::new(5, 3).unwrap();
    wall_column(&mut grid, 2);
    grid.set_start(0, 0);
    grid.set_end(4, 2);

    let mut session = session_for(&grid, SolverKind::AStar, None);
    session.toggle_solving();
    assert_eq!(run(&mut session, 1_000), TickOutcome::Exhausted);
    assert!(session.solver().path().is_empty());
    assert_eq!(session.solver().visited().len(), 6);
}

// ── Editing between runs ───────────────────────────────────────────

#[test]
fn restarting_after_an_edit_uses_the_new_walls() {
    let maze = grid_from_ascii(MAZE_5X5);
    let mut session = session_for(&maze, SolverKind::AStar, None);
    session.toggle_solving();
    assert_eq!(run(&mut session, 1_000), TickOutcome::Found);

    // Close the only corridor to the end and solve again.
    session.begin_stroke(2, 0);
    session.end_stroke();
    assert!(session.toggle_solving());
    assert_eq!(run(&mut session, 1_000), TickOutcome::Exhausted);
}

#[test]
fn switching_strategy_keeps_the_maze() {
    let maze = grid_from_ascii(MAZE_5X5);
    let mut session = session_for(&maze, SolverKind::RandomWalk, None);
    session.toggle_solving();
    run(&mut session, 10);

    session.toggle_algorithm();
    assert_eq!(session.algorithm(), SolverKind::AStar);
    assert_eq!(session.grid().wall_count(), maze.wall_count());
    assert!(session.grid().is_complete());
    assert!(session.toggle_solving());
    assert_eq!(run(&mut session, 1_000), TickOutcome::Found);
}

// ── Rendering ──────────────────────────────────────────────────────

#[test]
fn solved_maze_renders_path_over_visited() {
    let maze = grid_from_ascii(MAZE_5X5);
    let mut session = session_for(&maze, SolverKind::AStar, None);
    session.toggle_solving();
    run(&mut session, 1_000);

    let frame = session.render_ascii();
    assert_eq!(frame.lines().count(), 5);
    assert!(frame.starts_with('S'));
    let path_cells = frame.chars().filter(|&c| c == '*').count();
    // Every path cell except the two endpoints is drawn as '*'.
    assert_eq!(path_cells, session.solver().path().len() - 2);
    assert_eq!(session.cell_view(0, 1), CellView::Path);
    assert_eq!(session.cell_view(1, 0), CellView::Wall);
    assert_eq!(session.cell_view(4, 3), CellView::End);
}

#[test]
fn visited_cells_show_before_the_path_exists() {
    let maze = grid_from_ascii(MAZE_5X5);
    let mut session = session_for(&maze, SolverKind::AStar, None);
    session.toggle_solving();
    // Seed, then expand the start and its successor.
    for _ in 0..3 {
        session.tick();
    }
    assert!(session.solver().path().is_empty());
    assert_eq!(session.cell_view(0, 1), CellView::Visited);
    assert_eq!(session.cell_view(0, 0), CellView::Start);
    assert_eq!(session.solver().visited().first(), Some(&Cell::new(0, 0)));
}

// ── Arbitrary intent sequences ─────────────────────────────────────

mod proptests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Clone, Debug)]
    enum Intent {
        Stroke(Vec<(i32, i32)>),
        Endpoint(i32, i32),
        ToggleSolving,
        ToggleAlgorithm,
        Ticks(u8),
        Reset,
    }

    fn coord() -> impl Strategy<Value = (i32, i32)> {
        (-1i32..7, -1i32..6)
    }

    fn intent() -> impl Strategy<Value = Intent> {
        prop_oneof![
            prop::collection::vec(coord(), 1..6).prop_map(Intent::Stroke),
            coord().prop_map(|(x, y)| Intent::Endpoint(x, y)),
            Just(Intent::ToggleSolving),
            Just(Intent::ToggleAlgorithm),
            any::<u8>().prop_map(Intent::Ticks),
            Just(Intent::Reset),
        ]
    }

    proptest! {
        #[test]
        fn endpoints_never_sit_on_walls(intents in prop::collection::vec(intent(), 1..40)) {
            let mut session = Session::new(SessionConfig {
                width: 6,
                height: 5,
                seed: 3,
                step_budget: Some(200),
                ..SessionConfig::default()
            })
            .unwrap();

            for intent in intents {
                match intent {
                    Intent::Stroke(cells) => {
                        let (x, y) = cells[0];
                        session.begin_stroke(x, y);
                        for &(x, y) in &cells[1..] {
                            session.continue_stroke(x, y);
                        }
                        session.end_stroke();
                    }
                    Intent::Endpoint(x, y) => {
                        session.place_endpoint(x, y);
                    }
                    Intent::ToggleSolving => {
                        let solving = session.toggle_solving();
                        prop_assert_eq!(solving, session.is_solving());
                    }
                    Intent::ToggleAlgorithm => {
                        session.toggle_algorithm();
                        prop_assert!(!session.is_solving());
                    }
                    Intent::Ticks(n) => {
                        for _ in 0..n {
                            let outcome = session.tick();
                            if outcome != TickOutcome::Advanced {
                                prop_assert!(!session.is_solving());
                            }
                        }
                    }
                    Intent::Reset => session.reset(),
                }

                let grid = session.grid();
                for endpoint in [grid.start(), grid.end()].into_iter().flatten() {
                    prop_assert!(!grid.is_wall(endpoint.x, endpoint.y));
                }
                prop_assert!(grid.start().is_none() || grid.start() != grid.end());
                prop_assert!(session.run_ticks() <= 200);
            }
        }
    }
}
