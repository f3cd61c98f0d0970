//! Index-based views over a [`causemap_core::Graph`] used by the traversals.

pub mod adjacency;

pub use adjacency::Adjacency;
