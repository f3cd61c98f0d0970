//! Role classification and the per-node report.

use causemap_core::types::{Graph, NodeId};

use crate::scores::{NodeTally, ScoreTable};
use crate::types::{NodeReport, Role};

impl Role {
    /// Orphan beats Head beats Tail; anything with both directions is
    /// Ordinary. A self-loop gives a node one edge each way, so it lands in
    /// Ordinary.
    pub fn classify(tally: &NodeTally) -> Self {
        match (tally.in_count, tally.out_count) {
            (0, 0) => Self::Orphan,
            (_, 0) => Self::Head,
            (0, _) => Self::Tail,
            _ => Self::Ordinary,
        }
    }
}

/// Node report plus the classified id lists, each in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RoleReport {
    /// Sorted by domain, descending; ties keep declaration order.
    pub rows: Vec<NodeReport>,
    pub heads: Vec<NodeId>,
    pub tails: Vec<NodeId>,
    pub orphans: Vec<NodeId>,
}

pub fn build_role_report(graph: &Graph, scores: &ScoreTable<'_>) -> RoleReport {
    let mut report = RoleReport::default();

    for node in &graph.nodes {
        let tally = scores.get(&node.id);
        let role = Role::classify(&tally);
        match role {
            Role::Orphan => report.orphans.push(node.id.clone()),
            Role::Head => report.heads.push(node.id.clone()),
            Role::Tail => report.tails.push(node.id.clone()),
            Role::Ordinary => {}
        }
        report.rows.push(NodeReport {
            node_id: node.id.clone(),
            in_count: tally.in_count,
            out_count: tally.out_count,
            in_strength: tally.in_strength,
            out_strength: tally.out_strength,
            domain: tally.domain(),
            role,
        });
    }

    // stable
    report.rows.sort_by(|a, b| b.domain.cmp(&a.domain));
    report
}
