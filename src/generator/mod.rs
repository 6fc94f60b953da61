//! Randomized instance generation.
//!
//! - [`generate_nodes`] — one depot plus the requested customers and stations
//! - [`generate_edges`] — independent coin flip per unordered node pair
//!
//! Both take any [`rand::Rng`], so a seeded `StdRng` reproduces an instance.

mod edges;
mod nodes;

use std::ops::RangeInclusive;

pub use edges::{append_random_edges, generate_edges};
pub use nodes::{generate_nodes, regenerate_nodes};

use crate::models::Position;

/// Value ranges used by the generator.
///
/// # Examples
///
/// ```
/// use u_evrp::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default()
///     .with_edge_probability(1.0)
///     .with_distance_range(25..=25);
/// assert_eq!(config.edge_probability(), 1.0);
/// assert_eq!(config.distance_range(), &(25..=25));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    canvas_width: f64,
    canvas_height: f64,
    depot_position: Position,
    vehicle_range: RangeInclusive<u32>,
    demand_range: RangeInclusive<u32>,
    ports_range: RangeInclusive<u32>,
    edge_probability: f64,
    distance_range: RangeInclusive<u32>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            depot_position: Position::new(500.0, 50.0),
            vehicle_range: 2..=4,
            demand_range: 20..=30,
            ports_range: 2..=3,
            edge_probability: 0.5,
            distance_range: 20..=29,
        }
    }
}

impl GeneratorConfig {
    /// Sets the canvas extent customers and stations are scattered over.
    ///
    /// Negative or non-finite sizes collapse to zero.
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.canvas_width = sanitize_extent(width);
        self.canvas_height = sanitize_extent(height);
        self
    }

    /// Sets where the depot is placed.
    pub fn with_depot_position(mut self, position: Position) -> Self {
        self.depot_position = position;
        self
    }

    /// Sets the range the depot's vehicle count is drawn from.
    pub fn with_vehicle_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.vehicle_range = ordered(range);
        self
    }

    /// Sets the range pickup and delivery are drawn from.
    pub fn with_demand_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.demand_range = ordered(range);
        self
    }

    /// Sets the range station port counts are drawn from.
    pub fn with_ports_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.ports_range = ordered(range);
        self
    }

    /// Sets the probability that a node pair gets an edge, clamped to `[0, 1]`.
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self
    }

    /// Sets the range edge distances are drawn from.
    pub fn with_distance_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.distance_range = ordered(range);
        self
    }

    /// Canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Depot placement.
    pub fn depot_position(&self) -> Position {
        self.depot_position
    }

    /// Depot vehicle count range.
    pub fn vehicle_range(&self) -> &RangeInclusive<u32> {
        &self.vehicle_range
    }

    /// Customer pickup/delivery range.
    pub fn demand_range(&self) -> &RangeInclusive<u32> {
        &self.demand_range
    }

    /// Station port count range.
    pub fn ports_range(&self) -> &RangeInclusive<u32> {
        &self.ports_range
    }

    /// Per-pair edge probability.
    pub fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Edge distance range.
    pub fn distance_range(&self) -> &RangeInclusive<u32> {
        &self.distance_range
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        0.0
    }
}

// Swapped bounds would make `random_range` panic.
fn ordered(range: RangeInclusive<u32>) -> RangeInclusive<u32> {
    let (lo, hi) = range.into_inner();
    if lo <= hi {
        lo..=hi
    } else {
        hi..=lo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GeneratorConfig::default();
        assert_eq!(c.canvas_width(), 800.0);
        assert_eq!(c.canvas_height(), 600.0);
        assert_eq!(c.depot_position(), Position::new(500.0, 50.0));
        assert_eq!(c.vehicle_range(), &(2..=4));
        assert_eq!(c.demand_range(), &(20..=30));
        assert_eq!(c.ports_range(), &(2..=3));
        assert_eq!(c.edge_probability(), 0.5);
        assert_eq!(c.distance_range(), &(20..=29));
    }

    #[test]
    fn test_builder_sanitizes() {
        let c = GeneratorConfig::default()
            .with_canvas(-5.0, f64::NAN)
            .with_edge_probability(3.0)
            .with_ports_range(5..=1);
        assert_eq!(c.canvas_width(), 0.0);
        assert_eq!(c.canvas_height(), 0.0);
        assert_eq!(c.edge_probability(), 1.0);
        assert_eq!(c.ports_range(), &(1..=5));
        assert_eq!(
            GeneratorConfig::default()
                .with_edge_probability(f64::NAN)
                .edge_probability(),
            0.0
        );
    }
}
