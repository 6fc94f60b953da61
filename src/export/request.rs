//! Wire types of the solver request document.

use serde::{Deserialize, Serialize};

use crate::models::NodeKind;

/// A node as the solver sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestNode {
    /// Node id.
    pub id: String,
    /// Node kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Canvas x.
    pub x: f64,
    /// Canvas y.
    pub y: f64,
    /// Display label.
    pub label: String,
    /// Customer pickup, customers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup: Option<f64>,
    /// Customer delivery, customers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery: Option<f64>,
}

/// An edge as the solver sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEdge {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Traversal cost, `0` when the edge had none.
    pub distance: f64,
}

/// One electric vehicle of the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestVehicle {
    /// Vehicle id (`EV-1`, `EV-2`, ...).
    pub id: String,
    /// Load capacity.
    pub capacity: f64,
    /// Battery capacity.
    pub battery_capacity: f64,
    /// Charge at departure.
    pub initial_battery: f64,
}

/// A charging station descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStation {
    /// Station node id.
    pub id: String,
    /// Energy per time unit.
    pub charging_rate: f64,
    /// Simultaneously usable ports.
    pub max_ports: u32,
}

/// Global solving constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Minimum battery fraction a vehicle may drop to.
    pub min_battery_threshold: f64,
    /// Solving time limit.
    pub time_limit: f64,
    /// Energy consumed per unit distance.
    pub energy_consumption_rate: f64,
}

/// The document POSTed to the solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverRequest {
    /// Strategy tag; empty when none was requested.
    #[serde(default)]
    pub label: String,
    /// Instance nodes.
    pub nodes: Vec<RequestNode>,
    /// Instance edges.
    pub edges: Vec<RequestEdge>,
    /// Fleet.
    pub vehicles: Vec<RequestVehicle>,
    /// Charging station descriptors.
    pub charging_stations: Vec<ChargingStation>,
    /// Solving constraints.
    pub constraints: Constraints,
}

impl SolverRequest {
    /// Encodes the request as JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
