//! Graph boundary errors: malformed or rule-violating input graphs.

use super::error_code::{self, CausemapErrorCode};

/// Errors raised while turning wire input into a [`crate::Graph`].
///
/// The analysis itself never fails; these only come from the boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Graph JSON is malformed: {message}")]
    Json { message: String },

    #[error("Empty {kind} id")]
    EmptyId { kind: &'static str },

    #[error("Duplicate node id: {id}")]
    DuplicateNode { id: String },

    #[error("Invalid polarity {value}: must be -1, 0 or 1")]
    InvalidPolarity { value: i64 },

    #[error("Invalid confidence {value} on node {node_id}: must be within [0, 1]")]
    InvalidConfidence { node_id: String, value: f64 },

    #[error("Strength {value} on edge {edge_id} is outside 1..=5")]
    StrengthOutOfRange { edge_id: String, value: i64 },

    #[error("Edge {edge_id} references undeclared node {node_id}")]
    DanglingEndpoint { edge_id: String, node_id: String },
}

impl CausemapErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Json { .. } => error_code::GRAPH_PARSE,
            _ => error_code::GRAPH_INVALID,
        }
    }
}
