//! Blocking HTTP client for the solver service.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::export::SolverRequest;
use crate::overlay::SolverResponse;

/// Address of the solver service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/receive_json";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Posts [`SolverRequest`]s and decodes the answers.
///
/// Transport errors and non-2xx statuses map to [`Error::NetworkFailure`];
/// bodies without a `path` list map to [`Error::MalformedResponse`]. Nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct SolverClient {
    endpoint: String,
    agent: ureq::Agent,
}

impl Default for SolverClient {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverClient {
    /// Client for [`DEFAULT_ENDPOINT`].
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Client for another endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            agent: build_agent(DEFAULT_TIMEOUT),
        }
    }

    /// Replaces the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.agent = build_agent(timeout);
        self
    }

    /// Endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends `request` and decodes the response.
    pub fn solve(&self, request: &SolverRequest) -> Result<SolverResponse> {
        log::info!(
            "posting instance ({} nodes, {} edges) to {}",
            request.nodes.len(),
            request.edges.len(),
            self.endpoint
        );
        let response = self
            .agent
            .post(&self.endpoint)
            .send_json(request)
            .map_err(network_failure)?;
        let status = response.status();
        let body = response
            .into_string()
            .map_err(|e| Error::NetworkFailure(format!("reading response body: {e}")))?;
        log::info!("solver answered with status {status}");
        SolverResponse::from_json(&body)
    }
}

fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(timeout).build()
}

fn network_failure(err: ureq::Error) -> Error {
    match err {
        ureq::Error::Status(code, response) => {
            let body = response.into_string().unwrap_or_default();
            Error::NetworkFailure(format!("status {code}: {body}"))
        }
        ureq::Error::Transport(transport) => Error::NetworkFailure(transport.to_string()),
    }
}
