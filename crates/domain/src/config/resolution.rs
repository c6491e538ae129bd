use crate::recursion_budget::DEFAULT_MAX_RECURSIONS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolutionConfig {
    /// Resolution steps allowed per lookup before it is aborted.
    #[serde(default = "default_max_recursions")]
    pub max_recursions: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            max_recursions: default_max_recursions(),
        }
    }
}

fn default_max_recursions() -> usize {
    DEFAULT_MAX_RECURSIONS
}
