//! Export/solve/overlay cycles with stale-response protection.
//!
//! Each export gets a monotonically increasing request id. A response is only
//! applied when it answers the most recently issued request; answers to
//! superseded requests are dropped, so at most one overlay set is active.

use crate::export::{ExportTransformer, SolverRequest, SolverStrategy};
use crate::models::GraphModel;
use crate::overlay::{apply_overlay, OverlayReport, Palette, SolverResponse};

/// Id of an issued solver request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    /// Rebuilds an id handed back by a host.
    pub fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Numeric value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// A request waiting for the solver.
#[derive(Debug, Clone)]
pub struct PendingSolve {
    /// Id to hand back to [`SolveSession::complete`].
    pub id: RequestId,
    /// Document to send.
    pub request: SolverRequest,
}

/// What [`SolveSession::complete`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The overlay was replaced.
    Applied(OverlayReport),
    /// No request has been issued yet; the graph was not touched.
    Unissued {
        /// Id the response claimed to answer.
        answered: RequestId,
    },
    /// A newer request was issued; the graph was not touched.
    Stale {
        /// Id the response answered.
        answered: RequestId,
        /// Most recent id.
        latest: RequestId,
    },
}

/// Tracks in-flight solver requests for one graph.
///
/// # Examples
///
/// ```
/// use u_evrp::models::GraphModel;
/// use u_evrp::overlay::{SolverResponse, VehiclePath};
/// use u_evrp::session::{SolveOutcome, SolveSession};
///
/// let mut graph = GraphModel::new();
/// let mut session = SolveSession::default();
///
/// let old = session.begin(&graph, None);
/// let new = session.begin(&graph, None);
///
/// let response = SolverResponse::from_paths(vec![VehiclePath::new("EV-1", ["a", "b"])]);
/// let outcome = session.complete(&mut graph, old.id, &response);
/// assert!(matches!(outcome, SolveOutcome::Stale { .. }));
/// assert_eq!(graph.num_edges(), 0);
///
/// let outcome = session.complete(&mut graph, new.id, &response);
/// assert!(matches!(outcome, SolveOutcome::Applied(_)));
/// assert_eq!(graph.num_edges(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SolveSession {
    transformer: ExportTransformer,
    palette: Palette,
    latest: u64,
}

impl SolveSession {
    /// Creates a session with the given export transformer and palette.
    pub fn new(transformer: ExportTransformer, palette: Palette) -> Self {
        Self {
            transformer,
            palette,
            latest: 0,
        }
    }

    /// Exports `graph` and issues a new request id, superseding older ones.
    pub fn begin(&mut self, graph: &GraphModel, label: Option<&str>) -> PendingSolve {
        self.latest += 1;
        let id = RequestId(self.latest);
        log::debug!("issuing solver request {}", id.get());
        if graph.is_empty() {
            log::warn!("exporting an empty graph for request {}", id.get());
        }
        if let Some(label) = label.filter(|l| !l.is_empty()) {
            if SolverStrategy::from_label(label).is_none() {
                log::warn!("unknown solver label {label:?} sent as-is");
            }
        }
        PendingSolve {
            id,
            request: self.transformer.transform(graph, label),
        }
    }

    /// Most recently issued id, if any.
    pub fn latest(&self) -> Option<RequestId> {
        (self.latest > 0).then_some(RequestId(self.latest))
    }

    /// Applies `response` to `graph` if it answers the latest request.
    ///
    /// Responses arriving before any [`begin`](Self::begin) are rejected.
    pub fn complete(
        &mut self,
        graph: &mut GraphModel,
        id: RequestId,
        response: &SolverResponse,
    ) -> SolveOutcome {
        if self.latest == 0 {
            log::warn!("dropping response to request {}: none was issued", id.get());
            return SolveOutcome::Unissued { answered: id };
        }
        let latest = RequestId(self.latest);
        if id != latest {
            log::warn!(
                "dropping response to request {} (latest is {})",
                id.get(),
                latest.get()
            );
            return SolveOutcome::Stale {
                answered: id,
                latest,
            };
        }
        SolveOutcome::Applied(apply_overlay(graph, &response.paths, &self.palette))
    }

    /// Runs one full cycle through `client`: export, solve, overlay.
    ///
    /// On failure the graph is left unchanged.
    #[cfg(feature = "http")]
    pub fn solve(
        &mut self,
        graph: &mut GraphModel,
        client: &crate::client::SolverClient,
        label: Option<&str>,
    ) -> crate::Result<SolveOutcome> {
        let pending = self.begin(graph, label);
        let response = client.solve(&pending.request)?;
        Ok(self.complete(graph, pending.id, &response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Node, Position};
    use crate::overlay::VehiclePath;

    fn graph() -> GraphModel {
        let mut g = GraphModel::new();
        g.replace_nodes(vec![
            Node::depot("depot-0", "Depot", Position::default(), 2),
            Node::customer("customer-1", "Customer 1", Position::default(), 20.0, 20.0),
        ]);
        g
    }

    fn response(vehicle: &str) -> SolverResponse {
        SolverResponse::from_paths(vec![VehiclePath::new(
            vehicle,
            ["depot-0", "customer-1", "depot-0"],
        )])
    }

    #[test]
    fn test_ids_increase() {
        let mut s = SolveSession::default();
        let g = graph();
        assert_eq!(s.latest(), None);
        let a = s.begin(&g, None);
        let b = s.begin(&g, Some("Heuristic(A*)"));
        assert!(b.id > a.id);
        assert_eq!(s.latest(), Some(b.id));
        assert_eq!(b.request.label, "Heuristic(A*)");
        assert_eq!(b.request.vehicles.len(), 2);
    }

    #[test]
    fn test_stale_response_dropped_in_any_order() {
        let mut s = SolveSession::default();
        let mut g = graph();
        let first = s.begin(&g, None);
        let second = s.begin(&g, None);

        let outcome = s.complete(&mut g, second.id, &response("EV-2"));
        assert!(matches!(outcome, SolveOutcome::Applied(r) if r.inserted == 2));

        let outcome = s.complete(&mut g, first.id, &response("EV-1"));
        assert_eq!(
            outcome,
            SolveOutcome::Stale {
                answered: first.id,
                latest: second.id
            }
        );
        assert!(g.edge("vehicle-EV-1-edge-0").is_none());
        assert!(g.edge("vehicle-EV-2-edge-0").is_some());
    }

    #[test]
    fn test_complete_before_begin_rejected() {
        let mut s = SolveSession::default();
        let mut g = graph();
        let id = RequestId::from_raw(0);
        let outcome = s.complete(&mut g, id, &response("EV-1"));
        assert_eq!(outcome, SolveOutcome::Unissued { answered: id });
        assert_eq!(g.num_edges(), 0);
        assert_eq!(s.latest(), None);
    }

    #[test]
    fn test_unknown_label_passed_through() {
        let mut s = SolveSession::default();
        let p = s.begin(&GraphModel::new(), Some("greedy"));
        assert_eq!(p.request.label, "greedy");
        assert!(p.request.nodes.is_empty());
    }

    #[test]
    fn test_repeat_latest_replaces() {
        let mut s = SolveSession::default();
        let mut g = graph();
        let p = s.begin(&g, None);
        s.complete(&mut g, p.id, &response("EV-1"));
        let outcome = s.complete(&mut g, p.id, &response("EV-1"));
        assert!(matches!(outcome, SolveOutcome::Applied(r) if r.removed == 2 && r.inserted == 2));
        assert_eq!(g.num_edges(), 2);
    }
}
