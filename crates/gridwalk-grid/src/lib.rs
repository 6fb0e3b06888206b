//! Grid model for the gridwalk maze-search engine.
//!
//! [`Grid`] owns the wall, start and end state of a `width × height` cell
//! grid and answers the adjacency and validity queries that solvers read.
//! It follows a closed-boundary convention: every out-of-bounds cell is a
//! wall.
//!
//! All mutators report rejected input (out-of-bounds coordinates, walls on
//! endpoints, coinciding endpoints) with a `false` return and leave the grid
//! untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;

pub use grid::{Grid, Neighbors};
