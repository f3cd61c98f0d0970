//! Cluster assignment by derived key.

use causemap_core::config::Clustering;
use causemap_core::types::{BTreeMap, Graph, NodeId};

/// Key shared by every node when clustering is off.
pub const ALL_CLUSTER_KEY: &str = "cluster:all";

/// Tag used for nodes that declare no tags.
pub const UNTAGGED: &str = "__untagged__";

/// Map each node id to its cluster key.
///
/// Tag clustering is single-label: only the first declared tag counts, so
/// `["x", "y"]` lands in `tag:x` and nowhere else.
pub fn assign_clusters(graph: &Graph, clustering: Clustering) -> BTreeMap<NodeId, String> {
    graph
        .nodes
        .iter()
        .map(|node| {
            let key = match clustering {
                Clustering::None => ALL_CLUSTER_KEY.to_string(),
                Clustering::Tags => format!("tag:{}", node.primary_tag().unwrap_or(UNTAGGED)),
            };
            (node.id.clone(), key)
        })
        .collect()
}
