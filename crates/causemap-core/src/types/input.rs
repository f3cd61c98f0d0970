//! Wire-format graph input and boundary validation.
//!
//! Every optional field is defaulted here and nowhere else:
//! `strength ?? 1`, `polarity ?? 0`, `tags ?? []`, `type ?? "INFLUENCES"`.

use serde::{Deserialize, Serialize};

use super::collections::FxHashSet;
use super::map::{CausalEdge, ConceptNode, Graph, Polarity, DEFAULT_EDGE_KIND};
use crate::config::ValidationConfig;
use crate::errors::GraphError;

/// Inclusive strength range enforced when `strict_strength` is on.
pub const STRENGTH_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub nodes: Vec<NodeInput>,
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeInput {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub polarity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeInput {
    pub id: String,
    pub source_id: String,
    pub target_id: String,
    #[serde(default)]
    pub polarity: Option<i64>,
    #[serde(default)]
    pub strength: Option<i64>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl GraphInput {
    /// Parse the JSON wire form without validating it.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        serde_json::from_str(json).map_err(|e| GraphError::Json {
            message: e.to_string(),
        })
    }

    /// Apply defaults and validate into an analysable [`Graph`].
    pub fn into_graph(self, rules: &ValidationConfig) -> Result<Graph, GraphError> {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut nodes = Vec::with_capacity(self.nodes.len());
        for input in self.nodes {
            let node = input.into_node()?;
            if !seen.insert(node.id.clone()) {
                return Err(GraphError::DuplicateNode { id: node.id });
            }
            nodes.push(node);
        }

        let mut edges = Vec::with_capacity(self.edges.len());
        let mut dangling = 0usize;
        for input in self.edges {
            let edge = input.into_edge(rules)?;
            for endpoint in [&edge.source_id, &edge.target_id] {
                if !seen.contains(endpoint) {
                    if !rules.effective_allow_dangling() {
                        return Err(GraphError::DanglingEndpoint {
                            edge_id: edge.id.clone(),
                            node_id: endpoint.clone(),
                        });
                    }
                    dangling += 1;
                }
            }
            edges.push(edge);
        }

        if dangling > 0 {
            tracing::warn!(
                dangling,
                "graph has edge endpoints naming undeclared nodes; they carry no weight"
            );
        }

        Ok(Graph { nodes, edges })
    }
}

impl NodeInput {
    fn into_node(self) -> Result<ConceptNode, GraphError> {
        if self.id.is_empty() {
            return Err(GraphError::EmptyId { kind: "node" });
        }
        if let Some(c) = self.confidence {
            if !(0.0..=1.0).contains(&c) {
                return Err(GraphError::InvalidConfidence {
                    node_id: self.id,
                    value: c,
                });
            }
        }
        let polarity = self.polarity.map(Polarity::try_from).transpose()?;
        Ok(ConceptNode {
            id: self.id,
            title: self.title,
            note: self.note,
            tags: self.tags.unwrap_or_default(),
            confidence: self.confidence,
            polarity,
        })
    }
}

impl EdgeInput {
    fn into_edge(self, rules: &ValidationConfig) -> Result<CausalEdge, GraphError> {
        if self.id.is_empty() {
            return Err(GraphError::EmptyId { kind: "edge" });
        }
        let strength = self.strength.unwrap_or(1);
        if rules.effective_strict_strength() && !STRENGTH_RANGE.contains(&strength) {
            return Err(GraphError::StrengthOutOfRange {
                edge_id: self.id,
                value: strength,
            });
        }
        let polarity = Polarity::try_from(self.polarity.unwrap_or(0))?;
        Ok(CausalEdge {
            id: self.id,
            source_id: self.source_id,
            target_id: self.target_id,
            polarity,
            strength,
            kind: self.kind.unwrap_or_else(|| DEFAULT_EDGE_KIND.to_string()),
            note: self.note,
        })
    }
}

impl Graph {
    /// Parse, default, and validate a JSON graph in one step.
    pub fn from_json(json: &str, rules: &ValidationConfig) -> Result<Self, GraphError> {
        GraphInput::from_json(json)?.into_graph(rules)
    }
}
