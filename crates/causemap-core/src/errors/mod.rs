//! Error handling for causemap.
//! One error enum per concern, `thiserror` only.

pub mod causemap_error;
pub mod config_error;
pub mod error_code;
pub mod graph_error;

pub use causemap_error::CausemapError;
pub use config_error::ConfigError;
pub use error_code::CausemapErrorCode;
pub use graph_error::GraphError;
