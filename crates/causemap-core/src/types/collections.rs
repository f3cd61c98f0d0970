//! Re-exports of the collection types used across the workspace.
//!
//! Hash maps are for internal bookkeeping only; anything that reaches a
//! serialized result is an ordered `BTreeMap` so output is deterministic.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use std::collections::BTreeMap;
