//! Export of the graph to the solver's request schema.
//!
//! - [`ExportTransformer`] — graph + [`ExportDefaults`] → [`SolverRequest`]
//! - [`SolverStrategy`] — the strategy labels the solver dispatches on
//!
//! The raw graph file is [`crate::models::GraphSnapshot`]; it is not
//! transformed.

mod defaults;
mod request;
mod strategy;
mod transformer;

pub use defaults::{ExportDefaults, StationSource};
pub use request::{
    ChargingStation, Constraints, RequestEdge, RequestNode, RequestVehicle, SolverRequest,
};
pub use strategy::SolverStrategy;
pub use transformer::ExportTransformer;
