//! Core types and constructors for the Orchestrator.

use std::sync::Arc;
use std::time::Duration;

use winwin_common::{Color, EventBus, SplitRatio, TabId, WindowId};
use winwin_config::{RatioStore, WinwinConfig};

use crate::platform::WindowHost;

/// Tunables pulled out of the config once at startup.
#[derive(Debug, Clone)]
pub struct ArrangeSettings {
    /// Ratio used until a split has persisted one.
    pub default_ratio: SplitRatio,
    /// Merged window width as a fraction of the work area.
    pub merge_width: f64,
    pub badge_color: Color,
    /// Fallback badge refresh period.
    pub badge_interval: Duration,
}

impl ArrangeSettings {
    pub fn from_config(config: &WinwinConfig) -> Self {
        let defaults = Self::default();
        let badge_color = Color::from_hex(&config.badge.background_color).unwrap_or_else(|| {
            tracing::warn!(
                color = %config.badge.background_color,
                "invalid badge color, using default"
            );
            defaults.badge_color
        });
        Self {
            default_ratio: config.split.default_ratio(),
            merge_width: config.merge.target_width,
            badge_color,
            badge_interval: config.badge.refresh_interval(),
        }
    }
}

impl Default for ArrangeSettings {
    fn default() -> Self {
        Self {
            default_ratio: SplitRatio::default(),
            merge_width: 0.6,
            badge_color: Color::from_rgba(0x61, 0x61, 0x61, 255),
            badge_interval: Duration::from_secs(5),
        }
    }
}

/// Result of a completed split.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitOutcome {
    pub left: WindowId,
    pub right: WindowId,
    /// Tabs that moved to the right window, in strip order.
    pub moved: Vec<TabId>,
    /// Ratio persisted from the widths the host actually applied.
    pub ratio: Option<SplitRatio>,
}

/// Result of a completed merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub target: WindowId,
    /// Number of windows folded into the target.
    pub absorbed: usize,
}

/// Owns every window and tab rearrangement. Holds no layout state of its
/// own: button states and tab counts are re-queried from the host each time.
pub struct Orchestrator {
    pub(super) host: Arc<dyn WindowHost>,
    pub(super) store: Arc<dyn RatioStore>,
    pub(super) bus: Arc<EventBus>,
    pub(super) settings: ArrangeSettings,
}

impl Orchestrator {
    pub fn new(
        host: Arc<dyn WindowHost>,
        store: Arc<dyn RatioStore>,
        bus: Arc<EventBus>,
        settings: ArrangeSettings,
    ) -> Self {
        Self {
            host,
            store,
            bus,
            settings,
        }
    }

    /// Persisted ratio, or the configured default when none is stored or
    /// the store cannot be read.
    pub(super) fn load_ratio(&self) -> SplitRatio {
        match self.store.load() {
            Ok(Some(ratio)) => ratio,
            Ok(None) => self.settings.default_ratio,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read split ratio, using default");
                self.settings.default_ratio
            }
        }
    }
}
