//! Core types for the gridwalk steppable maze-search engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the grid model, the solvers and the driver:
//! cell coordinates, cardinal directions, search status and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod status;

pub use cell::{Cell, Direction};
pub use error::GridError;
pub use status::SearchStatus;
