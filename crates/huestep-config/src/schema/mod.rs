//! Configuration schema types for huestep.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod output;
mod rename;
mod system;

pub use output::*;
pub use rename::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration shared by `color-steps` and `rename-calendar`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuestepConfig {
    pub output: OutputConfig,
    pub rename: RenameConfig,
    pub logging: LoggingConfig,
}
