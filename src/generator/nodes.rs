//! Random node generation.

use rand::Rng;

use crate::models::{GraphModel, Node, Position, DEPOT_ID};

use super::GeneratorConfig;

/// Generates a fresh node set.
///
/// The result always holds exactly `1 + customer_count + station_count`
/// nodes: the depot first (`depot-0`), then `customer-1..=customer_count`,
/// then `station-1..=station_count`.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_evrp::generator::{generate_nodes, GeneratorConfig};
/// use u_evrp::models::NodeKind;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let nodes = generate_nodes(3, 2, &GeneratorConfig::default(), &mut rng);
/// assert_eq!(nodes.len(), 6);
/// assert_eq!(nodes[0].kind(), NodeKind::Depot);
/// assert_eq!(nodes[5].id(), "station-2");
/// ```
pub fn generate_nodes<R: Rng>(
    customer_count: usize,
    station_count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Node> {
    let mut nodes = Vec::with_capacity(1 + customer_count + station_count);

    nodes.push(Node::depot(
        DEPOT_ID,
        "Depot",
        config.depot_position(),
        rng.random_range(config.vehicle_range().clone()),
    ));

    for i in 1..=customer_count {
        let pickup = rng.random_range(config.demand_range().clone());
        let delivery = rng.random_range(config.demand_range().clone());
        nodes.push(Node::customer(
            format!("customer-{i}"),
            format!("Customer {i}"),
            random_position(config, rng),
            f64::from(pickup),
            f64::from(delivery),
        ));
    }

    for i in 1..=station_count {
        nodes.push(Node::station(
            format!("station-{i}"),
            format!("Station {i}"),
            random_position(config, rng),
            rng.random_range(config.ports_range().clone()),
        ));
    }

    log::debug!(
        "generated {} nodes ({customer_count} customers, {station_count} stations)",
        nodes.len()
    );
    nodes
}

/// Replaces the graph's nodes with a generated set and drops all edges.
///
/// Old edges would reference ids of the discarded set, so they are cleared.
/// To keep them, use `graph.replace_nodes(generate_nodes(..))` instead.
///
/// Returns the number of nodes created.
pub fn regenerate_nodes<R: Rng>(
    graph: &mut GraphModel,
    customer_count: usize,
    station_count: usize,
    config: &GeneratorConfig,
    rng: &mut R,
) -> usize {
    let nodes = generate_nodes(customer_count, station_count, config, rng);
    let n = nodes.len();
    graph.reset(nodes);
    n
}

fn random_position<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> Position {
    Position::new(
        rng.random_range(0.0..=config.canvas_width()),
        rng.random_range(0.0..=config.canvas_height()),
    )
}
