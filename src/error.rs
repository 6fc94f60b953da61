//! Error types shared across the crate.

use crate::models::NodeKind;

/// Why a user-authored edge was refused.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EdgeInputError {
    /// The source field was left empty.
    #[error("edge source is missing")]
    MissingSource,
    /// The target field was left empty.
    #[error("edge target is missing")]
    MissingTarget,
    /// The distance field was left empty.
    #[error("edge distance is missing")]
    MissingDistance,
    /// The distance could not be parsed, or is not a positive finite number.
    #[error("edge distance {0:?} is not a positive number")]
    InvalidDistance(String),
    /// Source and target name the same node.
    #[error("edge {0:?} would connect a node to itself")]
    SelfLoop(String),
    /// An endpoint does not name a node in the graph.
    #[error("edge endpoint {0:?} is not a node of the graph")]
    UnknownEndpoint(String),
}

/// Errors produced by graph editing, export, and overlay operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A candidate edge failed validation; the model was not touched.
    #[error("invalid edge input: {0}")]
    InvalidEdgeInput(#[from] EdgeInputError),

    /// No node with this id exists.
    #[error("unknown node {0:?}")]
    UnknownNode(String),

    /// An attribute edit targeted a node of a different kind.
    #[error("node {id:?} is a {found} node, not a {expected} node")]
    KindMismatch {
        /// Node being edited.
        id: String,
        /// Kind implied by the submitted attributes.
        expected: NodeKind,
        /// Kind of the stored node.
        found: NodeKind,
    },

    /// Submitted attributes are out of range (negative or non-finite demand).
    #[error("invalid attributes for node {id:?}: {reason}")]
    InvalidAttributes {
        /// Node being edited.
        id: String,
        /// What was wrong.
        reason: String,
    },

    /// The solver call failed or answered with a non-success status.
    #[error("solver request failed: {0}")]
    NetworkFailure(String),

    /// The solver answered, but the body is not a usable response.
    #[error("malformed solver response: {0}")]
    MalformedResponse(String),

    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Writing an exported graph file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
