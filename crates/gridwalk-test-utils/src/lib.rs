//! Test utilities for gridwalk development.
//!
//! Provides ASCII grid fixtures ([`grid_from_ascii`]), a breadth-first
//! shortest-path oracle ([`bfs_path_len`]) and a bounded stepping loop
//! ([`run_to_completion`]).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    bfs_path_len, grid_from_ascii, render_ascii, run_to_completion, wall_column, MAZE_5X5,
};
