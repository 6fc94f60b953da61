//! # u-evrp
//!
//! Electric vehicle routing (EVRP) instance composer: an editable graph of
//! depot, customers, and charging stations, random instance generation,
//! export to an external solver's request schema, and overlay of the
//! solver's routes back onto the graph.
//!
//! ## Modules
//!
//! - [`models`] — Node, Edge, and GraphModel types
//! - [`generator`] — Random node and edge generation
//! - [`editor`] — Validated user edits (manual edges, node attributes)
//! - [`export`] — Graph → solver request projection
//! - [`overlay`] — Solver response → overlay edges
//! - [`session`] — Export/solve/overlay cycles that ignore stale answers
//! - `client` — Blocking HTTP client for the solver (feature `http`)
//! - `wasm` — Browser bindings (feature `wasm`)

pub mod editor;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod overlay;
pub mod session;

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{EdgeInputError, Error, Result};
