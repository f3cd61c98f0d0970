//! Property tests for causemap-analysis.

use std::collections::{BTreeSet, HashSet, VecDeque};

use proptest::prelude::*;

use causemap_analysis::{analyze, AnalysisOptions, Role};
use causemap_core::types::{CausalEdge, ConceptNode, Graph};

/// Random graph over `n` declared nodes. Self-loops and parallel edges are
/// allowed; strengths include negatives to exercise clamping.
fn build_graph(n: usize, edges: &[(usize, usize, i64)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..n {
        graph.add_node(ConceptNode::new(format!("n{i}"), format!("Node {i}")));
    }
    for (k, &(src, tgt, strength)) in edges.iter().enumerate() {
        if src < n && tgt < n {
            graph.add_edge(
                CausalEdge::new(format!("e{k}"), format!("n{src}"), format!("n{tgt}"))
                    .with_strength(strength),
            );
        }
    }
    graph
}

fn edge_strategy(n: usize) -> impl Strategy<Value = Vec<(usize, usize, i64)>> {
    prop::collection::vec((0..n, 0..n, -2_i64..6), 0..n * 3)
}

fn successors(graph: &Graph, id: &str) -> Vec<String> {
    graph
        .edges
        .iter()
        .filter(|e| e.source_id == id)
        .map(|e| e.target_id.clone())
        .collect()
}

fn reachable(graph: &Graph, start: &str) -> HashSet<String> {
    let mut seen = HashSet::from([start.to_string()]);
    let mut queue = VecDeque::from([start.to_string()]);
    while let Some(cur) = queue.pop_front() {
        for next in successors(graph, &cur) {
            if seen.insert(next.clone()) {
                queue.push_back(next);
            }
        }
    }
    seen
}

proptest! {
    #[test]
    fn analysis_is_deterministic(edges in edge_strategy(15)) {
        let graph = build_graph(15, &edges);
        let options = AnalysisOptions::default();
        prop_assert_eq!(analyze(&graph, &options), analyze(&graph, &options));
    }
}

proptest! {
    #[test]
    fn strength_is_conserved(edges in edge_strategy(15)) {
        let graph = build_graph(15, &edges);
        let result = analyze(&graph, &AnalysisOptions::default());
        let total: u64 = graph.edges.iter().map(|e| e.strength.max(0) as u64).sum();
        prop_assert_eq!(result.scores.out_strength.values().sum::<u64>(), total);
        prop_assert_eq!(result.scores.in_strength.values().sum::<u64>(), total);
    }
}

proptest! {
    #[test]
    fn roles_partition_nodes(edges in edge_strategy(15)) {
        let graph = build_graph(15, &edges);
        let result = analyze(&graph, &AnalysisOptions::default());

        prop_assert_eq!(result.node_report.len(), 15);
        for row in &result.node_report {
            let isolated = row.in_count == 0 && row.out_count == 0;
            prop_assert_eq!(isolated, row.role == Role::Orphan);
            let listed = [
                result.head_nodes.contains(&row.node_id),
                result.tail_nodes.contains(&row.node_id),
                result.orphans.contains(&row.node_id),
            ];
            let expected = match row.role {
                Role::Head => [true, false, false],
                Role::Tail => [false, true, false],
                Role::Orphan => [false, false, true],
                Role::Ordinary => [false, false, false],
            };
            prop_assert_eq!(listed, expected);
        }
        for pair in result.node_report.windows(2) {
            prop_assert!(pair[0].domain >= pair[1].domain);
        }
    }
}

proptest! {
    #[test]
    fn loops_are_maximal_sccs(edges in edge_strategy(12)) {
        let graph = build_graph(12, &edges);
        let result = analyze(&graph, &AnalysisOptions::default());

        // Cross-check against petgraph's SCC decomposition.
        let mut pg = petgraph::graph::DiGraph::<(), ()>::new();
        let idx: Vec<_> = (0..12).map(|_| pg.add_node(())).collect();
        for &(s, t, _) in &edges {
            pg.add_edge(idx[s], idx[t], ());
        }
        let expected: BTreeSet<BTreeSet<String>> = petgraph::algo::tarjan_scc(&pg)
            .into_iter()
            .filter(|c| c.len() > 1)
            .map(|c| c.into_iter().map(|n| format!("n{}", n.index())).collect())
            .collect();
        let actual: BTreeSet<BTreeSet<String>> = result
            .loops
            .iter()
            .map(|l| l.nodes.iter().cloned().collect())
            .collect();

        prop_assert_eq!(actual, expected);
        for l in &result.loops {
            prop_assert!(l.size > 1);
            prop_assert_eq!(l.size, l.nodes.len());
        }
        for pair in result.loops.windows(2) {
            prop_assert!(pair[0].size >= pair[1].size);
        }
    }
}

proptest! {
    #[test]
    fn potent_tails_reach_two_heads(edges in edge_strategy(15)) {
        let graph = build_graph(15, &edges);
        let result = analyze(&graph, &AnalysisOptions::default());
        let heads: HashSet<&String> = result.head_nodes.iter().collect();

        for tail in &result.tail_nodes {
            let reached = reachable(&graph, tail)
                .into_iter()
                .filter(|id| id != tail && heads.contains(id))
                .count();
            prop_assert_eq!(result.potent_nodes.contains(tail), reached >= 2);
        }
        for id in &result.potent_nodes {
            prop_assert!(result.tail_nodes.contains(id));
        }
    }
}

proptest! {
    #[test]
    fn shortest_path_is_a_real_walk(edges in edge_strategy(10), from in 0_usize..10, to in 0_usize..10) {
        let graph = build_graph(10, &edges);
        let (from, to) = (format!("n{from}"), format!("n{to}"));
        match causemap_analysis::shortest_path(&graph, &from, &to) {
            Some(path) => {
                prop_assert_eq!(path.first(), Some(&from));
                prop_assert_eq!(path.last(), Some(&to));
                for step in path.windows(2) {
                    prop_assert!(successors(&graph, &step[0]).contains(&step[1]));
                }
            }
            None => prop_assert!(!reachable(&graph, &from).contains(&to)),
        }
    }
}
