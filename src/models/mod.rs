//! Domain model types for EVRP instance graphs.
//!
//! Provides nodes (depot, customers, charging stations) with kind-specific
//! attributes, road and overlay edges, and the graph that holds them.

mod edge;
mod graph;
mod node;

pub use edge::{Edge, OverlayStyle, OVERLAY_PREFIX};
pub use graph::{GraphModel, GraphSnapshot};
pub use node::{Node, NodeAttributes, NodeKind, Position, DEPOT_ID};
