//! Node types: depot, customers, and charging stations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical id of the depot created by the generator.
pub const DEPOT_ID: &str = "depot-0";

/// A 2D canvas coordinate. Layout only, no routing meaning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Position {
    /// Creates a position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The role a node plays in the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// Vehicle origin.
    Depot,
    /// Pickup/delivery demand point.
    Customer,
    /// Charging station.
    Station,
}

impl NodeKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Depot => "depot",
            Self::Customer => "customer",
            Self::Station => "station",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific node data.
///
/// The variant determines the node's [`NodeKind`], so attributes can never
/// disagree with the kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeAttributes {
    /// Depot owning the fleet.
    Depot {
        /// Number of vehicles stationed at the depot.
        #[serde(rename = "vehicleCount")]
        vehicle_count: u32,
    },
    /// Customer with pickup and delivery demand.
    Customer {
        /// Units picked up.
        pickup: f64,
        /// Units delivered.
        delivery: f64,
    },
    /// Charging station.
    Station {
        /// Number of charging ports.
        ports: u32,
    },
}

impl NodeAttributes {
    /// The kind these attributes belong to.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Depot { .. } => NodeKind::Depot,
            Self::Customer { .. } => NodeKind::Customer,
            Self::Station { .. } => NodeKind::Station,
        }
    }
}

/// A node of the instance graph.
///
/// # Examples
///
/// ```
/// use u_evrp::models::{Node, NodeKind, Position};
///
/// let c = Node::customer("customer-1", "Customer 1", Position::new(10.0, 20.0), 25.0, 22.0);
/// assert_eq!(c.kind(), NodeKind::Customer);
/// assert_eq!(c.id(), "customer-1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    id: String,
    label: String,
    position: Position,
    #[serde(flatten)]
    attributes: NodeAttributes,
}

impl Node {
    /// Creates a node from its parts.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Position,
        attributes: NodeAttributes,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            position,
            attributes,
        }
    }

    /// Creates a depot node.
    pub fn depot(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Position,
        vehicle_count: u32,
    ) -> Self {
        Self::new(id, label, position, NodeAttributes::Depot { vehicle_count })
    }

    /// Creates a customer node.
    pub fn customer(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Position,
        pickup: f64,
        delivery: f64,
    ) -> Self {
        Self::new(id, label, position, NodeAttributes::Customer { pickup, delivery })
    }

    /// Creates a charging station node.
    pub fn station(
        id: impl Into<String>,
        label: impl Into<String>,
        position: Position,
        ports: u32,
    ) -> Self {
        Self::new(id, label, position, NodeAttributes::Station { ports })
    }

    /// Node id, unique within a graph.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Canvas position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Moves the node on the canvas.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Node kind, derived from the attributes.
    pub fn kind(&self) -> NodeKind {
        self.attributes.kind()
    }

    /// Kind-specific attributes.
    pub fn attributes(&self) -> &NodeAttributes {
        &self.attributes
    }

    /// Vehicle count, if this is a depot.
    pub fn vehicle_count(&self) -> Option<u32> {
        match self.attributes {
            NodeAttributes::Depot { vehicle_count } => Some(vehicle_count),
            _ => None,
        }
    }

    /// Port count, if this is a station.
    pub fn ports(&self) -> Option<u32> {
        match self.attributes {
            NodeAttributes::Station { ports } => Some(ports),
            _ => None,
        }
    }

    /// Replaces the attributes. The caller guarantees the kind is unchanged.
    pub(crate) fn set_attributes(&mut self, attributes: NodeAttributes) {
        debug_assert_eq!(attributes.kind(), self.kind());
        self.attributes = attributes;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_attributes() {
        let d = Node::depot(DEPOT_ID, "Depot", Position::new(500.0, 50.0), 3);
        assert_eq!(d.kind(), NodeKind::Depot);
        assert_eq!(d.vehicle_count(), Some(3));
        assert_eq!(d.ports(), None);

        let s = Node::station("station-1", "Station 1", Position::default(), 2);
        assert_eq!(s.kind(), NodeKind::Station);
        assert_eq!(s.ports(), Some(2));
    }

    #[test]
    fn test_serialize_shape() {
        let c = Node::customer("customer-1", "Customer 1", Position::new(1.0, 2.0), 20.0, 30.0);
        let value = serde_json::to_value(&c).expect("serializable");
        assert_eq!(value["id"], "customer-1");
        assert_eq!(value["type"], "customer");
        assert_eq!(value["position"]["x"], 1.0);
        assert_eq!(value["pickup"], 20.0);
        assert_eq!(value["delivery"], 30.0);

        let d = Node::depot(DEPOT_ID, "Depot", Position::default(), 4);
        let value = serde_json::to_value(&d).expect("serializable");
        assert_eq!(value["type"], "depot");
        assert_eq!(value["vehicleCount"], 4);
    }

    #[test]
    fn test_deserialize_roundtrip() {
        let s = Node::station("station-2", "Station 2", Position::new(3.0, 4.0), 3);
        let json = serde_json::to_string(&s).expect("serializable");
        let back: Node = serde_json::from_str(&json).expect("deserializable");
        assert_eq!(back, s);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::Depot.to_string(), "depot");
        assert_eq!(NodeKind::Station.as_str(), "station");
    }
}
