//! Manually authored edges.

use crate::error::{EdgeInputError, Result};
use crate::models::{Edge, GraphModel};

/// Raw contents of the "add edge" form.
///
/// Fields are kept as the strings the user typed so validation sees exactly
/// what was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeInput {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Distance as typed.
    pub distance: String,
}

impl EdgeInput {
    /// Creates a form value.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        distance: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            distance: distance.into(),
        }
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Validates the fields against `graph` and builds the edge.
    ///
    /// Refuses empty fields, a distance that is not a positive finite number,
    /// self-loops, and endpoints that are not nodes of `graph`.
    pub fn validate(&self, graph: &GraphModel) -> std::result::Result<Edge, EdgeInputError> {
        let source = self.source.trim();
        let target = self.target.trim();
        let distance = self.distance.trim();

        if source.is_empty() {
            return Err(EdgeInputError::MissingSource);
        }
        if target.is_empty() {
            return Err(EdgeInputError::MissingTarget);
        }
        if distance.is_empty() {
            return Err(EdgeInputError::MissingDistance);
        }
        let value: f64 = distance
            .parse()
            .map_err(|_| EdgeInputError::InvalidDistance(distance.to_string()))?;
        if !value.is_finite() || value <= 0.0 {
            return Err(EdgeInputError::InvalidDistance(distance.to_string()));
        }
        if source == target {
            return Err(EdgeInputError::SelfLoop(source.to_string()));
        }
        for endpoint in [source, target] {
            if !graph.contains_node(endpoint) {
                return Err(EdgeInputError::UnknownEndpoint(endpoint.to_string()));
            }
        }

        Ok(Edge::road(source, target, value))
    }
}

/// Outcome of a successful [`add_edge`].
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeAdded {
    /// Id of the stored edge.
    pub id: String,
    /// The edge previously stored under the same id, if any.
    pub replaced: Option<Edge>,
}

/// Validates a form submission and appends the edge to `graph`.
///
/// On error the graph is untouched and the caller should show the message.
/// On success the caller clears the form ([`EdgeInput::clear`]) and closes it.
///
/// # Examples
///
/// ```
/// use u_evrp::editor::{add_edge, EdgeInput};
/// use u_evrp::models::{GraphModel, Node, Position};
///
/// let mut graph = GraphModel::new();
/// graph.replace_nodes(vec![
///     Node::depot("n1", "Depot", Position::default(), 2),
///     Node::customer("n2", "Customer", Position::default(), 20.0, 20.0),
/// ]);
///
/// assert!(add_edge(&mut graph, &EdgeInput::new("", "n2", "5")).is_err());
/// assert_eq!(graph.num_edges(), 0);
///
/// let added = add_edge(&mut graph, &EdgeInput::new("n1", "n2", "5")).unwrap();
/// assert_eq!(added.id, "edge-n1-n2");
/// assert_eq!(graph.num_edges(), 1);
/// ```
pub fn add_edge(graph: &mut GraphModel, input: &EdgeInput) -> Result<EdgeAdded> {
    let edge = input.validate(graph).map_err(|err| {
        log::debug!("rejected edge input {input:?}: {err}");
        err
    })?;
    let id = edge.id().to_string();
    let replaced = graph.push_edge(edge);
    Ok(EdgeAdded { id, replaced })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::models::{Node, Position};

    fn graph() -> GraphModel {
        let mut g = GraphModel::new();
        g.replace_nodes(vec![
            Node::depot("n1", "Depot", Position::default(), 2),
            Node::customer("n2", "Customer 1", Position::default(), 20.0, 20.0),
        ]);
        g
    }

    fn rejected(input: EdgeInput) -> EdgeInputError {
        let mut g = graph();
        match add_edge(&mut g, &input) {
            Err(Error::InvalidEdgeInput(e)) => {
                assert_eq!(g.num_edges(), 0);
                e
            }
            other => panic!("expected InvalidEdgeInput, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_source() {
        assert_eq!(
            rejected(EdgeInput::new("", "n2", "5")),
            EdgeInputError::MissingSource
        );
    }

    #[test]
    fn test_missing_target_and_distance() {
        assert_eq!(
            rejected(EdgeInput::new("n1", " ", "5")),
            EdgeInputError::MissingTarget
        );
        assert_eq!(
            rejected(EdgeInput::new("n1", "n2", "")),
            EdgeInputError::MissingDistance
        );
    }

    #[test]
    fn test_bad_distance() {
        for d in ["0", "-3", "abc", "inf", "NaN"] {
            assert_eq!(
                rejected(EdgeInput::new("n1", "n2", d)),
                EdgeInputError::InvalidDistance(d.to_string())
            );
        }
    }

    #[test]
    fn test_self_loop() {
        assert_eq!(
            rejected(EdgeInput::new("n1", "n1", "5")),
            EdgeInputError::SelfLoop("n1".into())
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        assert_eq!(
            rejected(EdgeInput::new("n1", "n9", "5")),
            EdgeInputError::UnknownEndpoint("n9".into())
        );
    }

    #[test]
    fn test_add_edge() {
        let mut g = graph();
        let added = add_edge(&mut g, &EdgeInput::new("n1", "n2", "5")).expect("valid");
        assert_eq!(added.id, "edge-n1-n2");
        assert!(added.replaced.is_none());
        assert_eq!(g.num_edges(), 1);
        let e = g.edge("edge-n1-n2").expect("stored");
        assert_eq!(e.distance(), Some(5.0));
        assert_eq!(e.label(), Some("5"));
    }

    #[test]
    fn test_re_adding_overwrites() {
        let mut g = graph();
        add_edge(&mut g, &EdgeInput::new("n1", "n2", "5")).expect("valid");
        let added = add_edge(&mut g, &EdgeInput::new("n1", "n2", "7.5")).expect("valid");
        assert_eq!(added.replaced.and_then(|e| e.distance()), Some(5.0));
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.edges()[0].distance(), Some(7.5));
    }

    #[test]
    fn test_clear() {
        let mut input = EdgeInput::new("n1", "n2", "5");
        input.clear();
        assert_eq!(input, EdgeInput::default());
    }
}
