//! Solver route overlays.
//!
//! - [`SolverResponse`] — decoded `{ "path": [{vehicleId, path}, ...] }` body
//! - [`apply_overlay`] — replace the `vehicle-*` edges with the new routes
//! - [`Palette`] — per-vehicle stroke colors

mod palette;
mod renderer;
mod response;

pub use palette::{Palette, FALLBACK_COLOR};
pub use renderer::{apply_overlay, clear_overlay, overlay_edges, OverlayReport};
pub use response::{SolverResponse, VehiclePath};
