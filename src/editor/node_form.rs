//! Node attribute edits.

use crate::error::{Error, Result};
use crate::models::{GraphModel, NodeAttributes};

/// Replaces the attributes of node `id`, returning the previous ones.
///
/// The node's id and kind never change: attributes of another kind are
/// refused with [`Error::KindMismatch`]. Negative or non-finite demand is
/// refused with [`Error::InvalidAttributes`].
///
/// # Examples
///
/// ```
/// use u_evrp::editor::edit_node;
/// use u_evrp::models::{GraphModel, Node, NodeAttributes, Position};
///
/// let mut graph = GraphModel::new();
/// graph.push_node(Node::depot("depot-0", "Depot", Position::default(), 2));
///
/// edit_node(&mut graph, "depot-0", NodeAttributes::Depot { vehicle_count: 5 }).unwrap();
/// assert_eq!(graph.depot().and_then(|d| d.vehicle_count()), Some(5));
/// ```
pub fn edit_node(
    graph: &mut GraphModel,
    id: &str,
    attributes: NodeAttributes,
) -> Result<NodeAttributes> {
    if let NodeAttributes::Customer { pickup, delivery } = attributes {
        for (name, v) in [("pickup", pickup), ("delivery", delivery)] {
            if !v.is_finite() || v < 0.0 {
                return Err(Error::InvalidAttributes {
                    id: id.to_string(),
                    reason: format!("{name} must be a non-negative number, got {v}"),
                });
            }
        }
    }

    let node = graph
        .node_mut(id)
        .ok_or_else(|| Error::UnknownNode(id.to_string()))?;
    if node.kind() != attributes.kind() {
        return Err(Error::KindMismatch {
            id: id.to_string(),
            expected: attributes.kind(),
            found: node.kind(),
        });
    }

    let previous = node.attributes().clone();
    node.set_attributes(attributes);
    log::debug!("updated attributes of {id}");
    Ok(previous)
}
