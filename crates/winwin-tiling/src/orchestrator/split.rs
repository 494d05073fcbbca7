//! Split the focused window into two side-by-side windows.

use tracing::{debug, info, info_span, warn, Instrument};
use winwin_common::{new_correlation_id, ArrangeError};

use crate::layout::{primary_work_area, split_frames};
use crate::partition::{plan_split, SplitPlan};

use super::{Orchestrator, SplitOutcome};

impl Orchestrator {
    /// Split the current window. The source window keeps the left side; the
    /// tabs chosen by [`plan_split`] move to a new window on the right.
    ///
    /// Any host failure stops the split at that step. Windows already
    /// created or tabs already moved stay as they are.
    pub async fn split(&self) -> Result<SplitOutcome, ArrangeError> {
        let span = info_span!("split", cid = %new_correlation_id());
        self.split_steps().instrument(span).await
    }

    async fn split_steps(&self) -> Result<SplitOutcome, ArrangeError> {
        let source = self
            .host
            .current_window()
            .await?
            .ok_or(ArrangeError::NoCurrentWindow)?;
        info!(window = %source.id, tabs = source.tabs.len(), "splitting window");

        let ratio = self.load_ratio();
        let work = primary_work_area(&self.host.displays().await?)?;
        let (left_frame, right_frame) = split_frames(work, ratio);
        debug!(
            left_width = left_frame.width,
            right_width = right_frame.width,
            "split geometry"
        );

        let plan = plan_split(&source.tabs);
        let moved = plan.moved();
        let (left, right) = match plan {
            SplitPlan::Companion => {
                let companion = self.host.create_window(None).await?;
                info!(window = %companion.id, "opened empty companion window");
                (source.id, companion.id)
            }
            SplitPlan::Move { seed, rest } => {
                let target = self.host.create_window(Some(seed)).await?;
                info!(window = %target.id, tab = %seed, "opened window around active tab");

                if !rest.is_empty() {
                    self.host.move_tabs(&rest, target.id).await?;
                    debug!(count = rest.len(), "moved trailing tabs");
                }

                let remaining = self.host.tabs(Some(source.id)).await?;
                let left = if remaining.is_empty() {
                    let replacement = self.host.create_window(None).await?;
                    warn!(
                        source = %source.id,
                        replacement = %replacement.id,
                        "source window emptied, opened a replacement"
                    );
                    replacement.id
                } else {
                    source.id
                };
                (left, target.id)
            }
        };

        let (left_window, right_window) = self
            .resize_pair(left, left_frame, right, right_frame)
            .await?;
        let ratio = self.persist_ratio(&left_window, &right_window);

        self.notify_window_state().await;
        info!(left = %left, right = %right, moved = moved.len(), "split complete");
        Ok(SplitOutcome {
            left,
            right,
            moved,
            ratio,
        })
    }
}
