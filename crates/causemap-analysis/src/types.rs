//! Analysis options and the result snapshot.

use causemap_core::config::analysis_config::{
    DEFAULT_DRIVER_LIMIT, DEFAULT_LOOP_LIMIT, DEFAULT_OUTCOME_LIMIT, DEFAULT_POTENCY_MIN_HEADS,
};
use causemap_core::config::{AnalysisConfig, Clustering};
use causemap_core::types::{BTreeMap, NodeId};
use serde::{Deserialize, Serialize};

/// Knobs for a single `analyze` call. `Default` reproduces the reference
/// behaviour: tag clustering, 20 drivers, 20 outcomes, 50 loops, 2 heads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisOptions {
    pub clustering: Clustering,
    pub driver_limit: usize,
    pub outcome_limit: usize,
    pub loop_limit: usize,
    pub potency_min_heads: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            clustering: Clustering::Tags,
            driver_limit: DEFAULT_DRIVER_LIMIT,
            outcome_limit: DEFAULT_OUTCOME_LIMIT,
            loop_limit: DEFAULT_LOOP_LIMIT,
            potency_min_heads: DEFAULT_POTENCY_MIN_HEADS,
        }
    }
}

impl AnalysisOptions {
    pub fn with_clustering(mut self, clustering: Clustering) -> Self {
        self.clustering = clustering;
        self
    }
}

impl From<&AnalysisConfig> for AnalysisOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            clustering: config.effective_clustering(),
            driver_limit: config.effective_driver_limit(),
            outcome_limit: config.effective_outcome_limit(),
            loop_limit: config.effective_loop_limit(),
            potency_min_heads: config.effective_potency_min_heads(),
        }
    }
}

/// Structural role of a node, derived from its in/out edge counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// No outgoing edges: an outcome or goal.
    Head,
    /// No incoming edges: a driver or lever.
    Tail,
    /// No edges at all.
    Orphan,
    Ordinary,
}

/// One row of the per-node report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeReport {
    pub node_id: NodeId,
    pub in_count: usize,
    pub out_count: usize,
    pub in_strength: u64,
    pub out_strength: u64,
    /// `in_strength + out_strength`.
    pub domain: u64,
    pub role: Role,
}

/// A node paired with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedNode {
    pub node_id: NodeId,
    pub score: u64,
}

/// A strongly connected component of two or more nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackLoop {
    /// Members in the order they were popped off the Tarjan stack.
    pub nodes: Vec<NodeId>,
    pub size: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub out_strength: BTreeMap<NodeId, u64>,
    pub in_strength: BTreeMap<NodeId, u64>,
}

/// Output of [`crate::analyze`]. A derived view; never persisted here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub scores: Scores,
    pub drivers: Vec<RankedNode>,
    pub outcomes: Vec<RankedNode>,
    pub clusters: BTreeMap<NodeId, String>,
    pub loops: Vec<FeedbackLoop>,
    pub node_report: Vec<NodeReport>,
    pub head_nodes: Vec<NodeId>,
    pub tail_nodes: Vec<NodeId>,
    pub orphans: Vec<NodeId>,
    pub potent_nodes: Vec<NodeId>,
}

impl AnalysisResult {
    pub fn summary(&self) -> AnalysisSummary {
        AnalysisSummary {
            nodes: self.node_report.len(),
            loops: self.loops.len(),
            heads: self.head_nodes.len(),
            tails: self.tail_nodes.len(),
            orphans: self.orphans.len(),
            potent: self.potent_nodes.len(),
        }
    }

    /// Report row for `id`, if the node was declared.
    pub fn report_for(&self, id: &str) -> Option<&NodeReport> {
        self.node_report.iter().find(|r| r.node_id == id)
    }
}

/// Headline counts of an analysis, for logs and terse output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub nodes: usize,
    pub loops: usize,
    pub heads: usize,
    pub tails: usize,
    pub orphans: usize,
    pub potent: usize,
}
