//! Boundary validation rules applied when loading graphs.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ValidationConfig {
    /// Reject edge strengths outside 1..=5. Default: false.
    pub strict_strength: Option<bool>,
    /// Accept edges naming undeclared nodes. Default: true.
    pub allow_dangling: Option<bool>,
}

impl ValidationConfig {
    pub fn effective_strict_strength(&self) -> bool {
        self.strict_strength.unwrap_or(false)
    }

    pub fn effective_allow_dangling(&self) -> bool {
        self.allow_dangling.unwrap_or(true)
    }
}
