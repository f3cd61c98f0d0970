//! Driver and outcome rankings.

use causemap_core::types::Graph;

use crate::scores::{NodeTally, ScoreTable};
use crate::types::RankedNode;

/// Rank declared nodes by `score` descending, keeping the top `limit`.
/// Equal scores keep declaration order.
pub fn rank_nodes(
    graph: &Graph,
    scores: &ScoreTable<'_>,
    score: impl Fn(&NodeTally) -> u64,
    limit: usize,
) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = graph
        .nodes
        .iter()
        .map(|n| RankedNode {
            node_id: n.id.clone(),
            score: score(&scores.get(&n.id)),
        })
        .collect();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Nodes with the most outgoing influence.
pub fn drivers(graph: &Graph, scores: &ScoreTable<'_>, limit: usize) -> Vec<RankedNode> {
    rank_nodes(graph, scores, |t| t.out_strength, limit)
}

/// Nodes receiving the most incoming influence.
pub fn outcomes(graph: &Graph, scores: &ScoreTable<'_>, limit: usize) -> Vec<RankedNode> {
    rank_nodes(graph, scores, |t| t.in_strength, limit)
}
