//! Feedback-loop detection via Tarjan's strongly connected components.
//!
//! The depth-first search runs on an explicit frame stack rather than the
//! call stack, so a 100k-node chain costs heap, not thread stack.

use crate::graph::Adjacency;
use crate::types::FeedbackLoop;

/// Per-node Tarjan bookkeeping. `index == None` means undiscovered.
#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    index: Option<usize>,
    low_link: usize,
    on_stack: bool,
}

/// A suspended visit: the node and the next successor position to try.
#[derive(Debug, Clone, Copy)]
struct Frame {
    node: usize,
    next: usize,
}

/// All strongly connected components, in completion order.
///
/// Members of each component appear in the order they were popped from the
/// Tarjan stack (reverse discovery within the component). Roots are tried in
/// declaration order and successors in edge order, so output is fully
/// determined by the input ordering.
pub fn strongly_connected_components(adj: &Adjacency<'_>) -> Vec<Vec<usize>> {
    let n = adj.len();
    let mut state = vec![NodeState::default(); n];
    let mut stack: Vec<usize> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();
    let mut components = Vec::new();
    let mut counter = 0usize;

    let mut discover = |v: usize, state: &mut [NodeState], stack: &mut Vec<usize>| {
        state[v] = NodeState {
            index: Some(counter),
            low_link: counter,
            on_stack: true,
        };
        counter += 1;
        stack.push(v);
    };

    for root in 0..n {
        if state[root].index.is_some() {
            continue;
        }
        discover(root, &mut state, &mut stack);
        frames.push(Frame { node: root, next: 0 });

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;
            if let Some(&w) = adj.successors(v).get(frame.next) {
                frame.next += 1;
                match state[w].index {
                    None => {
                        discover(w, &mut state, &mut stack);
                        frames.push(Frame { node: w, next: 0 });
                    }
                    Some(w_index) if state[w].on_stack => {
                        state[v].low_link = state[v].low_link.min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors done: finish v.
            frames.pop();
            if let Some(parent) = frames.last() {
                let low = state[v].low_link;
                let p = parent.node;
                state[p].low_link = state[p].low_link.min(low);
            }

            if Some(state[v].low_link) == state[v].index {
                let mut component = Vec::new();
                while let Some(w) = stack.pop() {
                    state[w].on_stack = false;
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                components.push(component);
            }
        }
    }

    components
}

/// Components of two or more nodes, largest first (stable), capped at `limit`.
///
/// Singletons are dropped even when the node has a self-loop: only cycles
/// through at least two distinct concepts count as feedback loops.
pub fn detect_feedback_loops(adj: &Adjacency<'_>, limit: usize) -> Vec<FeedbackLoop> {
    let mut loops: Vec<FeedbackLoop> = strongly_connected_components(adj)
        .into_iter()
        .filter(|c| c.len() > 1)
        .map(|c| FeedbackLoop {
            size: c.len(),
            nodes: c.into_iter().map(|i| adj.id(i).to_string()).collect(),
        })
        .collect();

    loops.sort_by(|a, b| b.size.cmp(&a.size));
    loops.truncate(limit);
    loops
}
