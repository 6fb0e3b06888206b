//! Interactive session driver for the gridwalk maze-search engine.
//!
//! A [`Session`] owns one [`Grid`](gridwalk_grid::Grid) and exactly one
//! active solver. It translates user intents (paint a wall stroke, place an
//! endpoint, start or stop solving, switch algorithm, clear everything) into
//! grid mutations and solver calls, and advances the search by at most one
//! step per [`tick()`](Session::tick).
//!
//! Rendering layers are exposed through [`CellView`]; pixel-to-cell input
//! translation and drawing belong to the embedding application.
//!
//! # Logging
//!
//! Every session owns a `tracing` span (`session`, carrying the grid size
//! and seed) and emits its events inside it. The library installs no
//! subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod session;
pub mod view;

pub use config::{ConfigError, SessionConfig};
pub use session::{EndpointChange, Session, StrokeMode, TickOutcome};
pub use view::CellView;
