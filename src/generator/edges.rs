//! Random edge generation over an existing node set.

use rand::Rng;

use crate::models::{Edge, GraphModel, Node};

use super::GeneratorConfig;

/// Draws a random edge set over `nodes`.
///
/// Every unordered pair `(i, j)` with `i < j`, in slice order, independently
/// gets an edge with probability [`GeneratorConfig::edge_probability`]. No
/// connectivity is guaranteed; the result may be disconnected.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_evrp::generator::{generate_edges, generate_nodes, GeneratorConfig};
///
/// let config = GeneratorConfig::default();
/// let mut rng = StdRng::seed_from_u64(42);
/// let nodes = generate_nodes(4, 1, &config, &mut rng);
/// let edges = generate_edges(&nodes, &config, &mut rng);
/// assert!(edges.len() <= nodes.len() * (nodes.len() - 1) / 2);
/// ```
pub fn generate_edges<R: Rng>(nodes: &[Node], config: &GeneratorConfig, rng: &mut R) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in &nodes[i + 1..] {
            if rng.random_bool(config.edge_probability()) {
                let distance = rng.random_range(config.distance_range().clone());
                edges.push(Edge::road(a.id(), b.id(), f64::from(distance)));
            }
        }
    }
    log::debug!("generated {} edges over {} nodes", edges.len(), nodes.len());
    edges
}

/// Draws a random edge set over the graph's nodes and appends it.
///
/// Existing edges are kept. A generated edge whose id is already stored
/// overwrites it, so repeated calls never duplicate a node pair.
/// Returns the number of edges drawn.
pub fn append_random_edges<R: Rng>(
    graph: &mut GraphModel,
    config: &GeneratorConfig,
    rng: &mut R,
) -> usize {
    let edges = generate_edges(graph.nodes(), config, rng);
    let n = edges.len();
    let overwritten = graph.extend_edges(edges);
    if overwritten > 0 {
        log::debug!("{overwritten} generated edges replaced existing ones");
    }
    n
}
