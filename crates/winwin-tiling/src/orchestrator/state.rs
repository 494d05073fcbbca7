//! Button-state broadcast and tab-count badge.

use tracing::{debug, warn};
use winwin_common::{ButtonStates, Event};

use super::Orchestrator;

impl Orchestrator {
    /// Recount windows and broadcast which popup buttons apply. Having no
    /// listener is normal. Returns the published states, or `None` when the
    /// windows could not be enumerated.
    pub async fn notify_window_state(&self) -> Option<ButtonStates> {
        let windows = match self.host.all_windows().await {
            Ok(windows) => windows,
            Err(e) => {
                warn!(error = %e, "failed to enumerate windows for button state");
                return None;
            }
        };

        let states = ButtonStates::from_window_count(windows.len());
        let listeners = self.bus.publish(Event::ButtonStates(states));
        debug!(
            windows = windows.len(),
            split = states.split_tabs_enabled,
            merge = states.merge_windows_enabled,
            listeners,
            "button states published"
        );
        Some(states)
    }

    /// Show the total tab count on the badge. If the count cannot be read
    /// the badge is cleared rather than left stale.
    pub async fn refresh_badge(&self) -> Option<usize> {
        match self.host.tabs(None).await {
            Ok(tabs) => {
                let count = tabs.len();
                let text = count.to_string();
                if let Err(e) = self.host.set_badge_text(Some(text)).await {
                    warn!(error = %e, "failed to set badge text");
                    return None;
                }
                if let Err(e) = self.host.set_badge_color(self.settings.badge_color).await {
                    warn!(error = %e, "failed to set badge color");
                }
                Some(count)
            }
            Err(e) => {
                warn!(error = %e, "failed to count tabs, clearing badge");
                if let Err(e) = self.host.set_badge_text(None).await {
                    warn!(error = %e, "failed to clear badge text");
                }
                None
            }
        }
    }
}
