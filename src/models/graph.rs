//! In-memory instance graph.

use serde::{Deserialize, Serialize};

use super::{Edge, Node, NodeKind};

/// The node and edge collections that every other component reads and writes.
///
/// No invariants are enforced here beyond id uniqueness: inserting an edge
/// whose id already exists overwrites the stored edge in place, and a node
/// with a known id replaces the stored node. Endpoint and attribute checks
/// belong to the callers ([`crate::editor`], [`crate::generator`]).
///
/// The graph remembers which node is its depot. The reference is taken from
/// the first depot whenever the node collection is replaced or appended to.
///
/// # Examples
///
/// ```
/// use u_evrp::models::{Edge, GraphModel, Node, Position};
///
/// let mut graph = GraphModel::new();
/// graph.replace_nodes(vec![
///     Node::depot("depot-0", "Depot", Position::default(), 2),
///     Node::customer("customer-1", "Customer 1", Position::default(), 20.0, 25.0),
/// ]);
/// graph.push_edge(Edge::road("depot-0", "customer-1", 12.0));
/// graph.push_edge(Edge::road("depot-0", "customer-1", 14.0));
///
/// assert_eq!(graph.num_edges(), 1);
/// assert_eq!(graph.depot().map(|d| d.id()), Some("depot-0"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphModel {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    depot: Option<usize>,
}

impl GraphModel {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns all edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    pub(crate) fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id() == id)
    }

    /// Returns `true` if a node with this id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id() == id)
    }

    /// The depot node, if the graph has one.
    pub fn depot(&self) -> Option<&Node> {
        self.depot.and_then(|i| self.nodes.get(i))
    }

    /// Nodes of the given kind, in insertion order.
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.iter().filter(move |n| n.kind() == kind)
    }

    /// Replaces the whole node collection. Edges are left untouched.
    pub fn replace_nodes(&mut self, nodes: Vec<Node>) {
        self.nodes = Vec::with_capacity(nodes.len());
        self.depot = None;
        self.extend_nodes(nodes);
    }

    /// Appends a node, replacing any stored node with the same id.
    pub fn push_node(&mut self, node: Node) {
        match self.nodes.iter().position(|n| n.id() == node.id()) {
            Some(i) => self.nodes[i] = node,
            None => self.nodes.push(node),
        }
        self.refresh_depot();
    }

    /// Appends several nodes.
    pub fn extend_nodes(&mut self, nodes: impl IntoIterator<Item = Node>) {
        for node in nodes {
            self.push_node(node);
        }
    }

    /// Replaces the whole edge collection.
    pub fn replace_edges(&mut self, edges: Vec<Edge>) {
        self.edges.clear();
        self.extend_edges(edges);
    }

    /// Appends an edge, overwriting a stored edge with the same id.
    ///
    /// Returns the replaced edge, if any.
    pub fn push_edge(&mut self, edge: Edge) -> Option<Edge> {
        match self.edges.iter().position(|e| e.id() == edge.id()) {
            Some(i) => Some(std::mem::replace(&mut self.edges[i], edge)),
            None => {
                self.edges.push(edge);
                None
            }
        }
    }

    /// Appends several edges. Returns how many stored edges were overwritten.
    pub fn extend_edges(&mut self, edges: impl IntoIterator<Item = Edge>) -> usize {
        edges
            .into_iter()
            .filter_map(|e| self.push_edge(e))
            .count()
    }

    /// Keeps only the edges matching the predicate. Returns how many were removed.
    pub fn retain_edges(&mut self, keep: impl FnMut(&Edge) -> bool) -> usize {
        let before = self.edges.len();
        self.edges.retain(keep);
        before - self.edges.len()
    }

    /// Removes all edges.
    pub fn clear_edges(&mut self) {
        self.edges.clear();
    }

    /// Replaces the nodes and drops every edge.
    pub fn reset(&mut self, nodes: Vec<Node>) {
        self.replace_nodes(nodes);
        self.clear_edges();
    }

    fn refresh_depot(&mut self) {
        self.depot = self.nodes.iter().position(|n| n.kind() == NodeKind::Depot);
    }
}

/// The raw graph as written to the exported file: `{ "nodes": [...], "edges": [...] }`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// All nodes.
    pub nodes: Vec<Node>,
    /// All edges, overlay edges included.
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    /// Default file name of the exported graph.
    pub const FILE_NAME: &'static str = "graph_data.json";

    /// Copies the current graph.
    pub fn from_graph(graph: &GraphModel) -> Self {
        Self {
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
        }
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn write_json<W: std::io::Write>(&self, writer: W) -> crate::Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Writes the snapshot to `path`.
    pub fn save(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        use std::io::Write as _;

        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = std::io::BufWriter::new(file);
        self.write_json(&mut writer)?;
        writer.flush()?;
        log::info!(
            "saved graph with {} nodes and {} edges to {}",
            self.nodes.len(),
            self.edges.len(),
            path.as_ref().display()
        );
        Ok(())
    }

    /// Rebuilds a graph from the snapshot.
    pub fn into_graph(self) -> GraphModel {
        let mut graph = GraphModel::new();
        graph.replace_nodes(self.nodes);
        graph.replace_edges(self.edges);
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;

    fn sample() -> GraphModel {
        let mut g = GraphModel::new();
        g.replace_nodes(vec![
            Node::customer("customer-1", "Customer 1", Position::default(), 20.0, 20.0),
            Node::depot("depot-0", "Depot", Position::default(), 3),
            Node::station("station-1", "Station 1", Position::default(), 2),
        ]);
        g
    }

    #[test]
    fn test_depot_reference() {
        let g = sample();
        assert_eq!(g.depot().map(|d| d.id()), Some("depot-0"));
        assert_eq!(g.num_nodes(), 3);
    }

    #[test]
    fn test_first_depot_wins() {
        let mut g = sample();
        g.push_node(Node::depot("depot-1", "Depot 2", Position::default(), 1));
        assert_eq!(g.depot().map(|d| d.id()), Some("depot-0"));
        assert_eq!(g.nodes_of_kind(NodeKind::Depot).count(), 2);
    }

    #[test]
    fn test_no_depot() {
        let mut g = GraphModel::new();
        g.push_node(Node::station("station-1", "Station 1", Position::default(), 2));
        assert!(g.depot().is_none());
    }

    #[test]
    fn test_push_node_replaces_same_id() {
        let mut g = sample();
        g.push_node(Node::customer("customer-1", "Customer 1", Position::default(), 5.0, 6.0));
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(
            g.nodes()[0].attributes(),
            &crate::models::NodeAttributes::Customer {
                pickup: 5.0,
                delivery: 6.0
            }
        );
    }

    #[test]
    fn test_push_edge_overwrites() {
        let mut g = sample();
        assert!(g.push_edge(Edge::road("depot-0", "customer-1", 10.0)).is_none());
        g.push_edge(Edge::road("depot-0", "station-1", 11.0));
        let old = g.push_edge(Edge::road("depot-0", "customer-1", 12.0));
        assert_eq!(old.and_then(|e| e.distance()), Some(10.0));
        assert_eq!(g.num_edges(), 2);
        // Overwrite keeps position.
        assert_eq!(g.edges()[0].distance(), Some(12.0));
    }

    #[test]
    fn test_retain_edges() {
        let mut g = sample();
        g.extend_edges(vec![
            Edge::road("depot-0", "customer-1", 10.0),
            Edge::road("depot-0", "station-1", 11.0),
        ]);
        let removed = g.retain_edges(|e| e.target() != "station-1");
        assert_eq!(removed, 1);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn test_replace_nodes_keeps_edges() {
        let mut g = sample();
        g.push_edge(Edge::road("depot-0", "customer-1", 10.0));
        g.replace_nodes(Vec::new());
        assert_eq!(g.num_edges(), 1);
        assert!(g.depot().is_none());
    }

    #[test]
    fn test_reset() {
        let mut g = sample();
        g.push_edge(Edge::road("depot-0", "customer-1", 10.0));
        g.reset(vec![Node::depot("depot-0", "Depot", Position::default(), 2)]);
        assert_eq!(g.num_nodes(), 1);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut g = sample();
        g.push_edge(Edge::road("depot-0", "customer-1", 10.0));
        let snap = GraphSnapshot::from_graph(&g);

        let mut buf = Vec::new();
        snap.write_json(&mut buf).expect("writable");
        let back: GraphSnapshot = serde_json::from_slice(&buf).expect("readable");
        assert_eq!(back, snap);

        let rebuilt = back.into_graph();
        assert_eq!(rebuilt.num_nodes(), 3);
        assert_eq!(rebuilt.num_edges(), 1);
        assert_eq!(rebuilt.depot().map(|d| d.id()), Some("depot-0"));
    }

    #[test]
    fn test_save_file() {
        let path = std::env::temp_dir().join(format!(
            "u-evrp-{}-{}",
            std::process::id(),
            GraphSnapshot::FILE_NAME
        ));
        let snap = GraphSnapshot::from_graph(&sample());
        snap.save(&path).expect("saved");

        let text = std::fs::read_to_string(&path).expect("readable");
        let _ = std::fs::remove_file(&path);
        let back: GraphSnapshot = serde_json::from_str(&text).expect("valid json");
        assert_eq!(back, snap);
    }
}
