//! Top-level error aggregating every subsystem via `From` conversions.

use super::error_code::{self, CausemapErrorCode};
use super::{ConfigError, GraphError};

#[derive(Debug, thiserror::Error)]
pub enum CausemapError {
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize result: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CausemapErrorCode for CausemapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Graph(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Io { .. } => error_code::IO_ERROR,
            Self::Serialize(_) => error_code::SERIALIZE_ERROR,
        }
    }
}
