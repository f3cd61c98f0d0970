//! Causal-map data model and collection aliases.

pub mod collections;
pub mod input;
pub mod map;

pub use collections::{BTreeMap, FxHashMap, FxHashSet};
pub use input::{EdgeInput, GraphInput, NodeInput};
pub use map::{CausalEdge, ConceptNode, Graph, NodeId, Polarity, DEFAULT_EDGE_KIND};
