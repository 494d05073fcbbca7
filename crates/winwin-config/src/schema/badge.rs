//! Tab-count badge settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BadgeConfig {
    /// Badge background as `#rrggbb` or `#rrggbbaa`.
    pub background_color: String,
    /// Fallback refresh period in seconds (valid range: 1-3600).
    pub refresh_interval_secs: u32,
}

impl BadgeConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.refresh_interval_secs.max(1)))
    }
}

impl Default for BadgeConfig {
    fn default() -> Self {
        Self {
            background_color: "#616161".into(),
            refresh_interval_secs: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_defaults() {
        let config = BadgeConfig::default();
        assert_eq!(config.background_color, "#616161");
        assert_eq!(config.refresh_interval(), Duration::from_secs(5));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let config = BadgeConfig {
            refresh_interval_secs: 0,
            ..BadgeConfig::default()
        };
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }
}
