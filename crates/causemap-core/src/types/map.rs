//! Concept nodes, causal edges, and the graph snapshot handed to analysis.
//!
//! These are the fully-populated forms: every optional wire field has already
//! been defaulted by [`super::input`], so the analysis never null-coalesces.

use serde::{Deserialize, Serialize};

use crate::errors::GraphError;

/// Opaque node identity, unique within a graph.
pub type NodeId = String;

/// Edge type assigned when the caller does not name one.
pub const DEFAULT_EDGE_KIND: &str = "INFLUENCES";

/// Direction of a causal effect. Wire form is the integer -1, 0 or 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Polarity {
    Negative,
    #[default]
    Neutral,
    Positive,
}

impl Polarity {
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Negative => -1,
            Self::Neutral => 0,
            Self::Positive => 1,
        }
    }
}

impl TryFrom<i64> for Polarity {
    type Error = GraphError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Self::Negative),
            0 => Ok(Self::Neutral),
            1 => Ok(Self::Positive),
            other => Err(GraphError::InvalidPolarity { value: other }),
        }
    }
}

impl From<Polarity> for i64 {
    fn from(p: Polarity) -> Self {
        p.as_i64()
    }
}

/// A vertex in a causal map: an idea or factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptNode {
    pub id: NodeId,
    pub title: String,
    /// Free-form annotation (merged ideas land here). Not analysed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Unordered labels; only the first one drives tag clustering.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Caller-assigned confidence in [0, 1]. Not analysed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<Polarity>,
}

impl ConceptNode {
    pub fn new(id: impl Into<NodeId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            note: None,
            tags: Vec::new(),
            confidence: None,
            polarity: None,
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// First declared tag, if any.
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }
}

/// A directed, signed, weighted causal link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CausalEdge {
    pub id: String,
    pub source_id: NodeId,
    pub target_id: NodeId,
    pub polarity: Polarity,
    /// Integer weight, 1-5 by convention. Negative values are tolerated and
    /// contribute nothing (see [`CausalEdge::weight`]).
    pub strength: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl CausalEdge {
    /// Neutral edge of strength 1 and the default kind.
    pub fn new(
        id: impl Into<String>,
        source_id: impl Into<NodeId>,
        target_id: impl Into<NodeId>,
    ) -> Self {
        Self {
            id: id.into(),
            source_id: source_id.into(),
            target_id: target_id.into(),
            polarity: Polarity::Neutral,
            strength: 1,
            kind: DEFAULT_EDGE_KIND.to_string(),
            note: None,
        }
    }

    pub fn with_strength(mut self, strength: i64) -> Self {
        self.strength = strength;
        self
    }

    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Weight attributed to the endpoints: strength clamped at zero.
    pub fn weight(&self) -> u64 {
        self.strength.max(0).unsigned_abs()
    }

    pub fn is_self_loop(&self) -> bool {
        self.source_id == self.target_id
    }
}

/// An immutable snapshot of a causal map: ordered nodes plus ordered edges.
///
/// Self-loops, parallel edges, and edges naming undeclared nodes are all
/// legal here. Declaration order is load-bearing for every tie-break in the
/// analysis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<ConceptNode>,
    #[serde(default)]
    pub edges: Vec<CausalEdge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: ConceptNode) -> &mut Self {
        self.nodes.push(node);
        self
    }

    pub fn add_edge(&mut self, edge: CausalEdge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    pub fn node(&self, id: &str) -> Option<&ConceptNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}
