//! Dense successor lists keyed by declaration position.

use causemap_core::types::{FxHashMap, Graph};

/// Directed adjacency over the declared nodes of a graph, built once per
/// analysis and shared by the SCC pass, potency BFS, and path search.
///
/// Node `i` is the `i`-th distinct declared id. Successor lists keep edge
/// order, so traversal order (and every tie it breaks) follows the input.
/// Edges touching an undeclared id are left out: such an endpoint has no
/// role and can never sit inside a cycle.
#[derive(Debug, Clone)]
pub struct Adjacency<'g> {
    ids: Vec<&'g str>,
    index: FxHashMap<&'g str, usize>,
    successors: Vec<Vec<usize>>,
}

impl<'g> Adjacency<'g> {
    pub fn build(graph: &'g Graph) -> Self {
        let mut ids = Vec::with_capacity(graph.nodes.len());
        let mut index = FxHashMap::default();
        for node in &graph.nodes {
            let id = node.id.as_str();
            if !index.contains_key(id) {
                index.insert(id, ids.len());
                ids.push(id);
            }
        }

        let mut successors = vec![Vec::new(); ids.len()];
        for edge in &graph.edges {
            let (Some(&src), Some(&tgt)) = (
                index.get(edge.source_id.as_str()),
                index.get(edge.target_id.as_str()),
            ) else {
                continue;
            };
            successors[src].push(tgt);
        }

        Self {
            ids,
            index,
            successors,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn id(&self, idx: usize) -> &'g str {
        self.ids[idx]
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn successors(&self, idx: usize) -> &[usize] {
        &self.successors[idx]
    }
}
