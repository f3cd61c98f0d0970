//! Potency: tails whose influence fans out to several distinct heads.

use std::collections::VecDeque;

use causemap_core::types::NodeId;

use crate::graph::Adjacency;

/// Heads reachable from `start` by breadth-first search, in visit order.
///
/// `start` itself never counts. Search stops once `limit` heads are found.
pub fn reachable_heads(
    adj: &Adjacency<'_>,
    start: usize,
    is_head: &[bool],
    limit: usize,
) -> Vec<usize> {
    let mut found = Vec::new();
    if limit == 0 {
        return found;
    }

    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current != start && is_head[current] {
            found.push(current);
            if found.len() >= limit {
                break;
            }
        }
        for &next in adj.successors(current) {
            if !visited[next] {
                visited[next] = true;
                queue.push_back(next);
            }
        }
    }

    found
}

/// Tails that reach at least `min_heads` distinct heads, in `tails` order.
pub fn detect_potent_nodes(
    adj: &Adjacency<'_>,
    tails: &[NodeId],
    heads: &[NodeId],
    min_heads: usize,
) -> Vec<NodeId> {
    let mut is_head = vec![false; adj.len()];
    for id in heads {
        if let Some(idx) = adj.index_of(id) {
            is_head[idx] = true;
        }
    }

    tails
        .iter()
        .filter(|tail| {
            adj.index_of(tail).is_some_and(|start| {
                reachable_heads(adj, start, &is_head, min_heads).len() >= min_heads
            })
        })
        .cloned()
        .collect()
}
