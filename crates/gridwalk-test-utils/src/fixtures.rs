//! Reusable grid fixtures and oracles.
//!
//! Layouts use one character per cell, one line per row:
//!
//! - `#` wall
//! - `S` start
//! - `E` end
//! - `.` (or any other character) open
//!
//! Leading and trailing whitespace on each line is ignored, as are blank
//! lines, so layouts can be written as indented raw strings.

use std::collections::{HashMap, VecDeque};

use gridwalk_core::Cell;
use gridwalk_grid::Grid;
use gridwalk_solver::Solver;

/// A 5×5 serpentine maze whose only shortest route is 16 cells long.
pub const MAZE_5X5: &str = "
    S#...
    .#.#.
    .#.#.
    .#.#E
    ...#.
";

/// Build a grid from an ASCII layout.
///
/// Panics on ragged rows, empty layouts or invalid endpoints; these are
/// mistakes in the test itself.
pub fn grid_from_ascii(layout: &str) -> Grid {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    assert!(!rows.is_empty(), "layout has no rows");
    let width = rows[0].chars().count();
    assert!(
        rows.iter().all(|r| r.chars().count() == width),
        "layout rows must all be {width} cells wide"
    );

    let mut grid = Grid::new(width as u32, rows.len() as u32)
        .unwrap_or_else(|e| panic!("invalid layout size: {e}"));
    let mut start = None;
    let mut end = None;
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let (x, y) = (x as i32, y as i32);
            match ch {
                '#' => {
                    grid.set_wall(x, y);
                }
                'S' => start = Some((x, y)),
                'E' => end = Some((x, y)),
                _ => {}
            }
        }
    }
    if let Some((x, y)) = start {
        assert!(grid.set_start(x, y), "start ({x}, {y}) rejected");
    }
    if let Some((x, y)) = end {
        assert!(grid.set_end(x, y), "end ({x}, {y}) rejected");
    }
    grid
}

/// Render `grid` back to the layout format, overlaying `path` cells as `*`.
pub fn render_ascii(grid: &Grid, path: &[Cell]) -> String {
    let mut out = String::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let cell = Cell::new(x, y);
            let ch = if grid.start() == Some(cell) {
                'S'
            } else if grid.end() == Some(cell) {
                'E'
            } else if grid.is_wall(x, y) {
                '#'
            } else if path.contains(&cell) {
                '*'
            } else {
                '.'
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Wall off the entire column `x`.
pub fn wall_column(grid: &mut Grid, x: i32) {
    for y in 0..grid.height() as i32 {
        grid.set_wall(x, y);
    }
}

/// Length in cells of the shortest start → end route, by breadth-first
/// search. `None` if the grid is incomplete or the end is unreachable.
pub fn bfs_path_len(grid: &Grid) -> Option<usize> {
    let start = grid.start()?;
    let end = grid.end()?;
    let mut dist: HashMap<Cell, usize> = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 1);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        if cell == end {
            return Some(d);
        }
        for n in grid.neighbors(cell.x, cell.y) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    None
}

/// Step `solver` until it stops or `max_steps` calls have been made.
///
/// Returns the number of calls that answered `true`.
pub fn run_to_completion<S: Solver + ?Sized>(
    solver: &mut S,
    grid: &Grid,
    max_steps: usize,
) -> usize {
    let mut advanced = 0;
    while advanced < max_steps && solver.step(grid) {
        advanced += 1;
    }
    advanced
}
