//! # causemap-core
//!
//! Shared foundation for the causemap workspace: the causal-map data model,
//! wire-format input types, error enums, layered configuration, and tracing.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{AnalysisConfig, CausemapConfig, ValidationConfig};
pub use errors::{CausemapError, ConfigError, GraphError};
pub use types::{CausalEdge, ConceptNode, Graph, GraphInput, NodeId, Polarity};
