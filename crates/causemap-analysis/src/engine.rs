//! Analysis orchestrator: runs every stage over one graph snapshot.

use causemap_core::config::AnalysisConfig;
use causemap_core::types::{Graph, NodeId};

use crate::clusters::assign_clusters;
use crate::graph::Adjacency;
use crate::loops::detect_feedback_loops;
use crate::paths::shortest_path_in;
use crate::potency::detect_potent_nodes;
use crate::ranking;
use crate::roles::build_role_report;
use crate::scores::ScoreTable;
use crate::types::{AnalysisOptions, AnalysisResult, Scores};

/// Analyze a causal map. Pure and synchronous: the same graph and options
/// always produce an identical result.
pub fn analyze(graph: &Graph, options: &AnalysisOptions) -> AnalysisResult {
    let _span = tracing::debug_span!(
        "analyze",
        nodes = graph.node_count(),
        edges = graph.edge_count()
    )
    .entered();

    let scores = ScoreTable::aggregate(graph);
    let drivers = ranking::drivers(graph, &scores, options.driver_limit);
    let outcomes = ranking::outcomes(graph, &scores, options.outcome_limit);

    let adj = Adjacency::build(graph);
    let loops = detect_feedback_loops(&adj, options.loop_limit);
    tracing::debug!(loops = loops.len(), "feedback loops detected");

    let clusters = assign_clusters(graph, options.clustering);

    let roles = build_role_report(graph, &scores);
    tracing::debug!(
        heads = roles.heads.len(),
        tails = roles.tails.len(),
        orphans = roles.orphans.len(),
        "roles classified"
    );

    let potent_nodes =
        detect_potent_nodes(&adj, &roles.tails, &roles.heads, options.potency_min_heads);

    let result = AnalysisResult {
        scores: Scores {
            out_strength: scores.out_strength_map(),
            in_strength: scores.in_strength_map(),
        },
        drivers,
        outcomes,
        clusters,
        loops,
        node_report: roles.rows,
        head_nodes: roles.heads,
        tail_nodes: roles.tails,
        orphans: roles.orphans,
        potent_nodes,
    };

    let summary = result.summary();
    tracing::info!(
        nodes = summary.nodes,
        loops = summary.loops,
        heads = summary.heads,
        tails = summary.tails,
        orphans = summary.orphans,
        potent = summary.potent,
        clustering = %options.clustering,
        "analysis complete"
    );

    result
}

/// Analysis entry point bound to a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct AnalysisEngine {
    options: AnalysisOptions,
}

impl AnalysisEngine {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(AnalysisOptions::from(config))
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn analyze(&self, graph: &Graph) -> AnalysisResult {
        analyze(graph, &self.options)
    }

    /// See [`crate::shortest_path`].
    pub fn shortest_path(&self, graph: &Graph, from: &str, to: &str) -> Option<Vec<NodeId>> {
        let adj = Adjacency::build(graph);
        let path = shortest_path_in(&adj, from, to);
        tracing::debug!(from, to, hops = path.as_ref().map(|p| p.len() - 1), "shortest path");
        path
    }
}
