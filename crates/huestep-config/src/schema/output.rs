//! Output formatting for `color-steps`.

use serde::{Deserialize, Serialize};

/// How the gradient is printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix interior steps with `#`. Endpoints are always echoed verbatim.
    pub hash_prefix: bool,
    /// Print the start and end colors around the interior steps.
    pub include_endpoints: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hash_prefix: false,
            include_endpoints: true,
        }
    }
}
