//! Configuration schema types for winwin.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod arrange;
mod badge;
mod logging;

pub use arrange::*;
pub use badge::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WinwinConfig {
    pub split: SplitConfig,
    pub merge: MergeConfig,
    pub badge: BadgeConfig,
    pub logging: LoggingConfig,
}
