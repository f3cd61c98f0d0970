//! Analysis configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub const DEFAULT_DRIVER_LIMIT: usize = 20;
pub const DEFAULT_OUTCOME_LIMIT: usize = 20;
pub const DEFAULT_LOOP_LIMIT: usize = 50;
pub const DEFAULT_POTENCY_MIN_HEADS: usize = 2;

/// How nodes are grouped into clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clustering {
    /// Every node shares one cluster.
    None,
    /// Cluster by first declared tag.
    #[default]
    Tags,
}

impl Clustering {
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for Clustering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Clustering {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "tags" => Ok(Self::Tags),
            other => Err(format!("unknown clustering mode '{other}' (expected none|tags)")),
        }
    }
}

/// Configuration for the analysis pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Clustering mode. Default: tags.
    pub clustering: Option<Clustering>,
    /// Maximum ranked drivers returned. Default: 20.
    pub driver_limit: Option<usize>,
    /// Maximum ranked outcomes returned. Default: 20.
    pub outcome_limit: Option<usize>,
    /// Maximum feedback loops returned. Default: 50.
    pub loop_limit: Option<usize>,
    /// Distinct heads a tail must reach to count as potent. Default: 2.
    pub potency_min_heads: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_clustering(&self) -> Clustering {
        self.clustering.unwrap_or_default()
    }

    pub fn effective_driver_limit(&self) -> usize {
        self.driver_limit.unwrap_or(DEFAULT_DRIVER_LIMIT)
    }

    pub fn effective_outcome_limit(&self) -> usize {
        self.outcome_limit.unwrap_or(DEFAULT_OUTCOME_LIMIT)
    }

    pub fn effective_loop_limit(&self) -> usize {
        self.loop_limit.unwrap_or(DEFAULT_LOOP_LIMIT)
    }

    pub fn effective_potency_min_heads(&self) -> usize {
        self.potency_min_heads.unwrap_or(DEFAULT_POTENCY_MIN_HEADS)
    }
}
