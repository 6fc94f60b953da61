//! Projection of the graph into a solver request.

use crate::models::{Edge, GraphModel, Node, NodeAttributes, NodeKind};

use super::defaults::{ExportDefaults, StationSource};
use super::request::{ChargingStation, RequestEdge, RequestNode, RequestVehicle, SolverRequest};

/// Builds [`SolverRequest`]s from a graph plus static defaults.
///
/// The fleet has one vehicle per unit of the depot's vehicle count. A graph
/// without a depot, or a depot with zero vehicles, exports a single vehicle.
///
/// # Examples
///
/// ```
/// use u_evrp::export::ExportTransformer;
/// use u_evrp::models::{GraphModel, Node, Position};
///
/// let mut graph = GraphModel::new();
/// graph.push_node(Node::depot("depot-0", "Depot", Position::default(), 3));
///
/// let request = ExportTransformer::default().transform(&graph, Some("Heuristic(A*)"));
/// let ids: Vec<&str> = request.vehicles.iter().map(|v| v.id.as_str()).collect();
/// assert_eq!(ids, vec!["EV-1", "EV-2", "EV-3"]);
/// assert_eq!(request.label, "Heuristic(A*)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExportTransformer {
    defaults: ExportDefaults,
}

impl ExportTransformer {
    /// Creates a transformer using the given defaults.
    pub fn new(defaults: ExportDefaults) -> Self {
        Self { defaults }
    }

    /// The defaults in use.
    pub fn defaults(&self) -> &ExportDefaults {
        &self.defaults
    }

    /// Builds the request for `graph`, tagged with an optional strategy label.
    pub fn transform(&self, graph: &GraphModel, label: Option<&str>) -> SolverRequest {
        let nodes: Vec<RequestNode> = graph.nodes().iter().map(request_node).collect();
        let edges: Vec<RequestEdge> = graph
            .edges()
            .iter()
            .filter(|e| self.defaults.include_overlay_edges() || !e.is_overlay())
            .map(request_edge)
            .collect();

        let vehicle_count = graph
            .depot()
            .and_then(Node::vehicle_count)
            .filter(|&n| n > 0)
            .unwrap_or(1);
        let vehicles = (1..=vehicle_count)
            .map(|i| RequestVehicle {
                id: format!("EV-{i}"),
                capacity: self.defaults.vehicle_capacity(),
                battery_capacity: self.defaults.battery_capacity(),
                initial_battery: self.defaults.initial_battery(),
            })
            .collect();

        let charging_stations = match self.defaults.station_source() {
            StationSource::Fixed => vec![self.defaults.charging_station().clone()],
            StationSource::FromGraph => graph
                .nodes_of_kind(NodeKind::Station)
                .map(|n| ChargingStation {
                    id: n.id().to_string(),
                    charging_rate: self.defaults.charging_station().charging_rate,
                    max_ports: n.ports().unwrap_or_default(),
                })
                .collect(),
        };

        log::debug!(
            "exporting {} nodes, {} edges, {vehicle_count} vehicles",
            nodes.len(),
            edges.len()
        );

        SolverRequest {
            label: label.unwrap_or_default().to_string(),
            nodes,
            edges,
            vehicles,
            charging_stations,
            constraints: self.defaults.constraints().clone(),
        }
    }
}

fn request_node(node: &Node) -> RequestNode {
    let (pickup, delivery) = match *node.attributes() {
        NodeAttributes::Customer { pickup, delivery } => (Some(pickup), Some(delivery)),
        NodeAttributes::Depot { .. } | NodeAttributes::Station { .. } => (None, None),
    };
    let position = node.position();
    RequestNode {
        id: node.id().to_string(),
        kind: node.kind(),
        x: position.x,
        y: position.y,
        label: node.label().to_string(),
        pickup,
        delivery,
    }
}

fn request_edge(edge: &Edge) -> RequestEdge {
    RequestEdge {
        source: edge.source().to_string(),
        target: edge.target().to_string(),
        distance: edge.distance().unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{OverlayStyle, Position};

    fn graph(vehicles: u32) -> GraphModel {
        let mut g = GraphModel::new();
        g.replace_nodes(vec![
            Node::depot("depot-0", "Depot", Position::new(500.0, 50.0), vehicles),
            Node::customer("customer-1", "Customer 1", Position::new(10.0, 20.0), 22.0, 27.0),
            Node::station("station-1", "Station 1", Position::new(30.0, 40.0), 3),
            Node::station("station-2", "Station 2", Position::new(50.0, 60.0), 2),
        ]);
        g.push_edge(Edge::road("depot-0", "customer-1", 25.0));
        g
    }

    #[test]
    fn test_vehicles_from_depot() {
        let req = ExportTransformer::default().transform(&graph(3), None);
        let ids: Vec<&str> = req.vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["EV-1", "EV-2", "EV-3"]);
        assert!(req.vehicles.iter().all(|v| v.capacity == 100.0
            && v.battery_capacity == 200.0
            && v.initial_battery == 200.0));
    }

    #[test]
    fn test_no_depot_one_vehicle() {
        let mut g = GraphModel::new();
        g.push_node(Node::customer("customer-1", "Customer 1", Position::default(), 20.0, 20.0));
        let req = ExportTransformer::default().transform(&g, None);
        assert_eq!(req.vehicles.len(), 1);
        assert_eq!(req.vehicles[0].id, "EV-1");
    }

    #[test]
    fn test_zero_vehicle_depot_one_vehicle() {
        let req = ExportTransformer::default().transform(&graph(0), None);
        assert_eq!(req.vehicles.len(), 1);
    }

    #[test]
    fn test_node_projection() {
        let req = ExportTransformer::default().transform(&graph(2), Some("CSP(using Z3)"));
        assert_eq!(req.label, "CSP(using Z3)");
        assert_eq!(req.nodes.len(), 4);

        let depot = &req.nodes[0];
        assert_eq!(depot.kind, NodeKind::Depot);
        assert_eq!((depot.x, depot.y), (500.0, 50.0));
        assert_eq!(depot.pickup, None);

        let customer = &req.nodes[1];
        assert_eq!(customer.label, "Customer 1");
        assert_eq!(customer.pickup, Some(22.0));
        assert_eq!(customer.delivery, Some(27.0));

        assert_eq!(req.nodes[2].delivery, None);
    }

    #[test]
    fn test_edge_projection_defaults_distance() {
        let mut g = graph(2);
        g.push_edge(Edge::overlay(
            "depot-0",
            "customer-1",
            0,
            OverlayStyle {
                vehicle_id: "EV-1".into(),
                color_index: 0,
                color: "#e91e63".into(),
                animated: true,
            },
        ));
        let req = ExportTransformer::default().transform(&g, None);
        assert_eq!(req.edges.len(), 2);
        assert_eq!(req.edges[0].distance, 25.0);
        assert_eq!(req.edges[1].distance, 0.0);

        let filtered = ExportTransformer::new(ExportDefaults::default().without_overlay_edges())
            .transform(&g, None);
        assert_eq!(filtered.edges.len(), 1);
    }

    #[test]
    fn test_fixed_station_and_constraints() {
        let req = ExportTransformer::default().transform(&graph(2), None);
        assert_eq!(
            req.charging_stations,
            vec![ChargingStation {
                id: "station-1".into(),
                charging_rate: 50.0,
                max_ports: 2,
            }]
        );
        assert_eq!(req.constraints.min_battery_threshold, 0.15);
        assert_eq!(req.constraints.time_limit, 8.0);
        assert_eq!(req.constraints.energy_consumption_rate, 0.1);
    }

    #[test]
    fn test_stations_from_graph() {
        let t = ExportTransformer::new(
            ExportDefaults::default().with_station_source(StationSource::FromGraph),
        );
        let req = t.transform(&graph(2), None);
        let got: Vec<(&str, u32)> = req
            .charging_stations
            .iter()
            .map(|s| (s.id.as_str(), s.max_ports))
            .collect();
        assert_eq!(got, vec![("station-1", 3), ("station-2", 2)]);
    }

    #[test]
    fn test_json_shape() {
        let req = ExportTransformer::default().transform(&graph(2), None);
        let value: serde_json::Value =
            serde_json::from_str(&req.to_json().expect("encodable")).expect("valid json");
        assert_eq!(value["label"], "");
        assert_eq!(value["nodes"][0]["type"], "depot");
        assert!(value["nodes"][0].get("pickup").is_none());
        assert_eq!(value["nodes"][1]["pickup"], 22.0);
        assert_eq!(value["edges"][0]["source"], "depot-0");
        assert_eq!(value["vehicles"][1]["id"], "EV-2");
        assert_eq!(value["charging_stations"][0]["max_ports"], 2);
        assert_eq!(value["constraints"]["time_limit"], 8.0);
    }
}
