//! Stable error codes for callers that shape wire responses.

/// Every error enum implements this to expose a machine-readable code.
pub trait CausemapErrorCode {
    /// The stable code string (e.g. `"GRAPH_INVALID"`).
    fn error_code(&self) -> &'static str;

    /// `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const GRAPH_INVALID: &str = "GRAPH_INVALID";
pub const GRAPH_PARSE: &str = "GRAPH_PARSE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZE_ERROR: &str = "SERIALIZE_ERROR";
