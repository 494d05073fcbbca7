//! Two-window resize used by split.

use tracing::{debug, error, warn};
use winwin_common::{HostError, Rect, SplitRatio, WindowId};

use crate::platform::Window;

use super::Orchestrator;

impl Orchestrator {
    /// Apply `left_frame` and `right_frame` independently. Both updates are
    /// always issued; a failure of one does not undo the other. Returns the
    /// windows as laid out by the host, or the first error.
    pub async fn resize_pair(
        &self,
        left: WindowId,
        left_frame: Rect,
        right: WindowId,
        right_frame: Rect,
    ) -> Result<(Window, Window), HostError> {
        let (left_result, right_result) = tokio::join!(
            self.host.update_window(left, left_frame),
            self.host.update_window(right, right_frame),
        );

        if let Err(e) = &left_result {
            error!(window = %left, error = %e, "failed to resize left window");
        }
        if let Err(e) = &right_result {
            error!(window = %right, error = %e, "failed to resize right window");
        }

        let left_window = left_result?;
        let right_window = right_result?;
        debug!(
            left = %left,
            left_width = left_window.rect.width,
            right = %right,
            right_width = right_window.rect.width,
            "resized split windows"
        );
        Ok((left_window, right_window))
    }

    /// Remember the split the host actually applied for the next split.
    pub(super) fn persist_ratio(&self, left: &Window, right: &Window) -> Option<SplitRatio> {
        let ratio = SplitRatio::from_widths(left.rect.width, right.rect.width)?;
        match self.store.save(ratio) {
            Ok(()) => Some(ratio),
            Err(e) => {
                warn!(error = %e, "failed to persist split ratio");
                None
            }
        }
    }
}
