//! Score aggregation: per-node in/out strength and edge counts.

use causemap_core::types::{BTreeMap, FxHashMap, Graph, NodeId};

/// Edge tallies for one node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeTally {
    pub in_count: usize,
    pub out_count: usize,
    pub in_strength: u64,
    pub out_strength: u64,
}

impl NodeTally {
    /// Total connectivity weight, saturating at `u64::MAX`.
    pub fn domain(&self) -> u64 {
        self.in_strength.saturating_add(self.out_strength)
    }
}

/// Tallies for every declared node, zero-initialised.
///
/// Edge endpoints that name no declared node are dropped silently: the map
/// editor can reference a node that is still being created.
///
/// Strength totals saturate at `u64::MAX` instead of wrapping.
#[derive(Debug, Clone, Default)]
pub struct ScoreTable<'g> {
    tallies: FxHashMap<&'g str, NodeTally>,
}

impl<'g> ScoreTable<'g> {
    pub fn aggregate(graph: &'g Graph) -> Self {
        let mut tallies: FxHashMap<&'g str, NodeTally> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), NodeTally::default()))
            .collect();

        for edge in &graph.edges {
            let w = edge.weight();
            if let Some(t) = tallies.get_mut(edge.source_id.as_str()) {
                t.out_strength = t.out_strength.saturating_add(w);
                t.out_count += 1;
            }
            if let Some(t) = tallies.get_mut(edge.target_id.as_str()) {
                t.in_strength = t.in_strength.saturating_add(w);
                t.in_count += 1;
            }
        }

        Self { tallies }
    }

    /// Tally for `id`; all zeros when the id was never declared.
    pub fn get(&self, id: &str) -> NodeTally {
        self.tallies.get(id).copied().unwrap_or_default()
    }

    pub fn out_strength_map(&self) -> BTreeMap<NodeId, u64> {
        self.project(|t| t.out_strength)
    }

    pub fn in_strength_map(&self) -> BTreeMap<NodeId, u64> {
        self.project(|t| t.in_strength)
    }

    fn project(&self, f: impl Fn(&NodeTally) -> u64) -> BTreeMap<NodeId, u64> {
        self.tallies
            .iter()
            .map(|(id, t)| ((*id).to_string(), f(t)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use causemap_core::types::{CausalEdge, ConceptNode};

    use super::*;

    fn pair() -> Graph {
        let mut graph = Graph::new();
        graph
            .add_node(ConceptNode::new("a", "A"))
            .add_node(ConceptNode::new("b", "B"));
        graph
    }

    #[test]
    fn self_loop_counts_on_both_sides() {
        let mut graph = pair();
        graph.add_edge(CausalEdge::new("e", "a", "a").with_strength(3));
        let table = ScoreTable::aggregate(&graph);
        let a = table.get("a");
        assert_eq!((a.in_count, a.out_count), (1, 1));
        assert_eq!((a.in_strength, a.out_strength), (3, 3));
        assert_eq!(a.domain(), 6);
    }

    #[test]
    fn negative_strength_counts_but_weighs_nothing() {
        let mut graph = pair();
        graph.add_edge(CausalEdge::new("e", "a", "b").with_strength(-2));
        let table = ScoreTable::aggregate(&graph);
        assert_eq!(table.get("a").out_count, 1);
        assert_eq!(table.get("a").out_strength, 0);
        assert_eq!(table.get("b").in_strength, 0);
    }

    #[test]
    fn dangling_endpoint_only_credits_the_declared_side() {
        let mut graph = pair();
        graph.add_edge(CausalEdge::new("e", "a", "ghost").with_strength(2));
        let table = ScoreTable::aggregate(&graph);
        assert_eq!(table.get("a").out_strength, 2);
        assert_eq!(table.get("ghost"), NodeTally::default());
        assert!(!table.in_strength_map().contains_key("ghost"));
    }

    #[test]
    fn parallel_edges_accumulate() {
        let mut graph = pair();
        graph
            .add_edge(CausalEdge::new("e1", "a", "b").with_strength(2))
            .add_edge(CausalEdge::new("e2", "a", "b").with_strength(5));
        let table = ScoreTable::aggregate(&graph);
        assert_eq!(table.get("a").out_strength, 7);
        assert_eq!(table.get("b").in_count, 2);
    }

    #[test]
    fn huge_strengths_saturate() {
        let mut graph = pair();
        for i in 0..3 {
            graph.add_edge(CausalEdge::new(format!("e{i}"), "a", "b").with_strength(i64::MAX));
        }
        let table = ScoreTable::aggregate(&graph);
        assert_eq!(table.get("a").out_strength, u64::MAX);
        assert_eq!(table.get("b").in_strength, u64::MAX);
        assert_eq!(table.get("a").out_count, 3);
        assert_eq!(table.get("a").domain(), u64::MAX);
    }

    #[test]
    fn domain_saturates_on_self_loop() {
        let mut graph = pair();
        graph
            .add_edge(CausalEdge::new("e1", "a", "a").with_strength(i64::MAX))
            .add_edge(CausalEdge::new("e2", "a", "a").with_strength(i64::MAX));
        let a = ScoreTable::aggregate(&graph).get("a");
        assert_eq!(a.out_strength, 2 * i64::MAX as u64);
        assert_eq!(a.domain(), u64::MAX);
    }
}
