//! Defaults for `rename-calendar`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Year written at the front of every renamed file (valid range: 1-9999).
    pub target_year: u32,
    /// File extension to match, without the dot.
    pub extension: String,
    /// Size token that maps to the `top` position; anything else is `bottom`.
    pub large_size: String,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            target_year: 2014,
            extension: "jpg".into(),
            large_size: "big".into(),
        }
    }
}
