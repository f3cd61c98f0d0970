//! # causemap-analysis
//!
//! Structural analysis of causal maps. A pure, synchronous pipeline over an
//! immutable [`Graph`](causemap_core::Graph) snapshot:
//!
//! - score aggregation (in/out strength and counts)
//! - role classification (Head / Tail / Orphan / Ordinary)
//! - feedback loops via an iterative Tarjan SCC pass
//! - potency: tails that reach two or more heads
//! - tag clustering and driver/outcome ranking
//!
//! plus a standalone unweighted [`shortest_path`].

pub mod clusters;
pub mod engine;
pub mod graph;
pub mod loops;
pub mod paths;
pub mod potency;
pub mod ranking;
pub mod roles;
pub mod scores;
pub mod types;

pub use causemap_core::config::Clustering;
pub use engine::{analyze, AnalysisEngine};
pub use paths::shortest_path;
pub use types::{
    AnalysisOptions, AnalysisResult, AnalysisSummary, FeedbackLoop, NodeReport, RankedNode,
    Role, Scores,
};
