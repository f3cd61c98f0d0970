//! Unweighted shortest path between two concepts.

use std::collections::VecDeque;

use causemap_core::types::{Graph, NodeId};

use crate::graph::Adjacency;

/// Fewest-hops path from `from` to `to`, both inclusive.
///
/// Polarity and strength are ignored. Returns `None` when either id is not a
/// declared node or `to` is unreachable. Among equally short paths the one
/// found first in edge order wins.
pub fn shortest_path(graph: &Graph, from: &str, to: &str) -> Option<Vec<NodeId>> {
    let adj = Adjacency::build(graph);
    shortest_path_in(&adj, from, to)
}

/// [`shortest_path`] over a prebuilt adjacency.
pub fn shortest_path_in(adj: &Adjacency<'_>, from: &str, to: &str) -> Option<Vec<NodeId>> {
    let start = adj.index_of(from)?;
    let goal = adj.index_of(to)?;

    // prev[v] = Some(parent) once v is reached; the start is its own parent.
    let mut prev: Vec<Option<usize>> = vec![None; adj.len()];
    prev[start] = Some(start);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            break;
        }
        for &next in adj.successors(current) {
            if prev[next].is_none() {
                prev[next] = Some(current);
                queue.push_back(next);
            }
        }
    }

    prev[goal]?;

    let mut path = vec![adj.id(goal).to_string()];
    let mut current = goal;
    while current != start {
        current = prev[current]?;
        path.push(adj.id(current).to_string());
    }
    path.reverse();
    Some(path)
}
