//! Configuration system for causemap.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod causemap_config;
pub mod validation_config;

pub use analysis_config::{AnalysisConfig, Clustering};
pub use causemap_config::{CausemapConfig, CliOverrides};
pub use validation_config::ValidationConfig;
