//! Fold every window into the rightmost one.

use futures_util::future::join_all;
use tracing::{debug, error, info, info_span, Instrument};
use winwin_common::{new_correlation_id, ArrangeError, HostError, WindowId};

use crate::layout::{merge_frame, primary_work_area, rightmost};
use crate::platform::Window;

use super::{MergeOutcome, Orchestrator};

impl Orchestrator {
    /// Merge all windows into the rightmost one, then size it to the
    /// configured share of the work area against the right edge.
    ///
    /// Windows are drained concurrently. If any of them fails the merge is
    /// reported as failed and nothing is rolled back or resized.
    pub async fn merge(&self) -> Result<MergeOutcome, ArrangeError> {
        let span = info_span!("merge", cid = %new_correlation_id());
        self.merge_steps().instrument(span).await
    }

    async fn merge_steps(&self) -> Result<MergeOutcome, ArrangeError> {
        let windows = self.host.all_windows().await?;
        if windows.len() < 2 {
            return Err(ArrangeError::NotEnoughWindows(windows.len()));
        }

        let work = primary_work_area(&self.host.displays().await?)?;
        let target = rightmost(&windows)
            .map(|w| w.id)
            .ok_or(ArrangeError::NotEnoughWindows(0))?;
        info!(target = %target, windows = windows.len(), "merging windows");

        let others: Vec<&Window> = windows.iter().filter(|w| w.id != target).collect();
        let results = join_all(others.iter().map(|w| self.absorb(w, target))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            return Err(ArrangeError::MergeFailed {
                failed,
                total: others.len(),
            });
        }

        self.host
            .update_window(target, merge_frame(work, self.settings.merge_width))
            .await?;
        self.refresh_badge().await;
        self.notify_window_state().await;

        info!(target = %target, absorbed = others.len(), "merge complete");
        Ok(MergeOutcome {
            target,
            absorbed: others.len(),
        })
    }

    /// Move one window's tabs to the end of `target` and close it.
    async fn absorb(&self, window: &Window, target: WindowId) -> Result<(), HostError> {
        let tabs = window.tab_ids();
        if !tabs.is_empty() {
            self.host.move_tabs(&tabs, target).await.map_err(|e| {
                error!(window = %window.id, error = %e, "failed to move tabs into merge target");
                e
            })?;
            debug!(window = %window.id, count = tabs.len(), "moved tabs");
        }

        // The host may have closed the window with its last tab, or the
        // user may have closed it meanwhile.
        match self.host.window(window.id).await {
            Ok(Some(_)) => self.host.remove_window(window.id).await.map_err(|e| {
                error!(window = %window.id, error = %e, "failed to close merged window");
                e
            }),
            Ok(None) => {
                debug!(window = %window.id, "window already closed");
                Ok(())
            }
            Err(e) => {
                error!(window = %window.id, error = %e, "failed to look up merged window");
                Err(e)
            }
        }
    }
}
