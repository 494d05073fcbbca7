//! Split and merge geometry settings.

use serde::{Deserialize, Serialize};
use winwin_common::SplitRatio;

/// Split settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Left window's share of the work area when no ratio has been
    /// persisted yet (valid range: 0.1-0.9).
    pub default_left: f64,
}

impl SplitConfig {
    pub fn default_ratio(&self) -> SplitRatio {
        SplitRatio::with_left(self.default_left)
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self { default_left: 0.4 }
    }
}

/// Merge settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Width of the merged window as a fraction of the work area,
    /// right-aligned (valid range: 0.1-1.0).
    pub target_width: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self { target_width: 0.6 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_default_ratio_is_forty_sixty() {
        let ratio = SplitConfig::default().default_ratio();
        assert_eq!(ratio, SplitRatio::default());
    }

    #[test]
    fn merge_partial_toml() {
        let config: MergeConfig = toml::from_str("target_width = 0.75").unwrap();
        assert!((config.target_width - 0.75).abs() < f64::EPSILON);
    }
}
