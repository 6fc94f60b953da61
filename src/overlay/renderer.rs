//! Conversion of solved routes into overlay edges.

use crate::models::{Edge, GraphModel, OverlayStyle};

use super::palette::Palette;
use super::response::VehiclePath;

/// Summary of an [`apply_overlay`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayReport {
    /// Overlay edges removed from the previous run.
    pub removed: usize,
    /// Overlay edges stored after the run.
    pub inserted: usize,
    /// Segments lost because an earlier segment of the same run had the same
    /// id (a vehicle id repeated in one response).
    pub collided: usize,
    /// Inserted edges with an endpoint missing from the graph.
    pub dangling: usize,
}

/// Builds the overlay segments for a set of vehicle paths.
///
/// The `k`-th consecutive pair of a vehicle's path becomes the edge
/// `vehicle-<vehicleId>-edge-<k>`, colored by the vehicle's position in
/// `paths` modulo the palette length. Paths with fewer than two nodes
/// produce nothing.
pub fn overlay_edges(paths: &[VehiclePath], palette: &Palette) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (vehicle_index, vehicle) in paths.iter().enumerate() {
        let (color_index, color) = palette.pick(vehicle_index);
        for (k, pair) in vehicle.path.windows(2).enumerate() {
            edges.push(Edge::overlay(
                pair[0].as_str(),
                pair[1].as_str(),
                k,
                OverlayStyle {
                    vehicle_id: vehicle.vehicle_id.clone(),
                    color_index,
                    color: color.to_string(),
                    animated: true,
                },
            ));
        }
    }
    edges
}

/// Replaces the graph's overlay with the given vehicle paths.
///
/// Every edge in the `vehicle-` namespace is removed first, then the new
/// segments are inserted in one batch, so repeated runs never accumulate
/// stale routes. Segments whose endpoints are not in the graph are still
/// inserted; they are only counted in [`OverlayReport::dangling`].
///
/// # Examples
///
/// ```
/// use u_evrp::models::GraphModel;
/// use u_evrp::overlay::{apply_overlay, Palette, VehiclePath};
///
/// let mut graph = GraphModel::new();
/// let paths = vec![VehiclePath::new("EV-1", ["depot-0", "customer-1", "depot-0"])];
///
/// let first = apply_overlay(&mut graph, &paths, &Palette::default());
/// let second = apply_overlay(&mut graph, &paths, &Palette::default());
/// assert_eq!(first.inserted, 2);
/// assert_eq!(second.removed, 2);
/// assert_eq!(graph.num_edges(), 2);
/// assert!(graph.edge("vehicle-EV-1-edge-1").is_some());
/// ```
pub fn apply_overlay(
    graph: &mut GraphModel,
    paths: &[VehiclePath],
    palette: &Palette,
) -> OverlayReport {
    let edges = overlay_edges(paths, palette);
    let dangling = edges
        .iter()
        .filter(|e| !graph.contains_node(e.source()) || !graph.contains_node(e.target()))
        .count();
    if dangling > 0 {
        log::warn!("{dangling} overlay edges reference nodes missing from the graph");
    }

    let removed = graph.retain_edges(|e| !e.is_overlay());
    let synthesized = edges.len();
    let collided = graph.extend_edges(edges);
    if collided > 0 {
        log::warn!("{collided} overlay segments were overwritten by segments with the same id");
    }
    let inserted = synthesized - collided;

    log::info!(
        "overlay for {} vehicles: removed {removed}, inserted {inserted}",
        paths.len()
    );
    OverlayReport {
        removed,
        inserted,
        collided,
        dangling,
    }
}

/// Removes every overlay edge. Returns how many were removed.
pub fn clear_overlay(graph: &mut GraphModel) -> usize {
    graph.retain_edges(|e| !e.is_overlay())
}
