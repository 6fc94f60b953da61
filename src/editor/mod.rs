//! User edits of the instance graph.
//!
//! - [`add_edge`] — validate and append a manually entered edge
//! - [`edit_node`] — replace a node's kind-specific attributes

mod edge_form;
mod node_form;

pub use edge_form::{add_edge, EdgeAdded, EdgeInput};
pub use node_form::edit_node;
