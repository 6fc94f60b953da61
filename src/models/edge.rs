//! Edge types: user/random roads and solver overlay segments.

use serde::{Deserialize, Serialize};

/// Id prefix reserved for overlay edges.
pub const OVERLAY_PREFIX: &str = "vehicle-";

/// Drawing metadata carried only by overlay edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    /// Vehicle whose route this segment belongs to.
    pub vehicle_id: String,
    /// Index into the palette the color was taken from.
    pub color_index: usize,
    /// Stroke color.
    pub color: String,
    /// Always `true` for overlay segments.
    pub animated: bool,
}

/// An edge between two nodes.
///
/// Direction carries no routing meaning; `source`/`target` order only
/// affects display and the derived id.
///
/// # Examples
///
/// ```
/// use u_evrp::models::Edge;
///
/// let e = Edge::road("n1", "n2", 5.0);
/// assert_eq!(e.id(), "edge-n1-n2");
/// assert_eq!(e.distance(), Some(5.0));
/// assert!(!e.is_overlay());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: String,
    source: String,
    target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    overlay: Option<OverlayStyle>,
}

impl Edge {
    /// Id of a road edge between `source` and `target`.
    pub fn road_id(source: &str, target: &str) -> String {
        format!("edge-{source}-{target}")
    }

    /// Id of the `index`-th overlay segment of `vehicle_id`.
    pub fn overlay_id(vehicle_id: &str, index: usize) -> String {
        format!("{OVERLAY_PREFIX}{vehicle_id}-edge-{index}")
    }

    /// Creates a road edge labelled with its distance.
    pub fn road(source: impl Into<String>, target: impl Into<String>, distance: f64) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: Self::road_id(&source, &target),
            source,
            target,
            distance: Some(distance),
            label: Some(format!("{distance}")),
            overlay: None,
        }
    }

    /// Creates the `index`-th overlay segment of a vehicle route.
    pub fn overlay(
        source: impl Into<String>,
        target: impl Into<String>,
        index: usize,
        style: OverlayStyle,
    ) -> Self {
        Self {
            id: Self::overlay_id(&style.vehicle_id, index),
            source: source.into(),
            target: target.into(),
            distance: None,
            label: Some(style.vehicle_id.clone()),
            overlay: Some(style),
        }
    }

    /// Edge id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Source node id.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Target node id.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Traversal cost, unset on overlay edges.
    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    /// Display label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Overlay drawing metadata.
    pub fn overlay_style(&self) -> Option<&OverlayStyle> {
        self.overlay.as_ref()
    }

    /// Returns `true` if the id is in the overlay namespace.
    pub fn is_overlay(&self) -> bool {
        self.id.starts_with(OVERLAY_PREFIX)
    }
}
