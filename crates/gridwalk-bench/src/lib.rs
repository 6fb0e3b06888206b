//! Benchmark profiles for the gridwalk maze-search engine.
//!
//! Every profile puts the start in the top-left corner and the end in the
//! bottom-right corner:
//!
//! - [`open_profile`]: no walls at all
//! - [`comb_profile`]: full-height walls with alternating gaps, forcing a
//!   serpentine route
//! - [`scatter_profile`]: seeded random walls at a given density

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use gridwalk_grid::Grid;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// An empty `width`×`height` grid with corner endpoints.
///
/// Panics on a zero or oversized dimension.
pub fn open_profile(width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    place_corners(&mut grid);
    grid
}

/// Every other column is a wall with a single gap, alternating between the
/// bottom and top row, so the only route snakes across the whole grid.
pub fn comb_profile(width: u32, height: u32) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    let (w, h) = (width as i32, height as i32);
    for (i, x) in (1..w - 1).step_by(2).enumerate() {
        let gap = if i % 2 == 0 { h - 1 } else { 0 };
        for y in (0..h).filter(|&y| y != gap) {
            grid.set_wall(x, y);
        }
    }
    place_corners(&mut grid);
    grid
}

/// Walls placed independently with probability `density`, from a ChaCha8
/// stream seeded with `seed`. The corners stay open. The end may be
/// unreachable.
pub fn scatter_profile(width: u32, height: u32, density: f64, seed: u64) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    place_corners(&mut grid);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            if rng.random_bool(density) {
                // Refused on the endpoints.
                grid.set_wall(x, y);
            }
        }
    }
    grid
}

fn place_corners(grid: &mut Grid) {
    grid.set_start(0, 0);
    grid.set_end(grid.width() as i32 - 1, grid.height() as i32 - 1);
}
