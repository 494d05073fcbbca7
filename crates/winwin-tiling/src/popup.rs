//! Model of the toolbar popup: two buttons whose enabled flags follow the
//! orchestrator's `updateButtonStates` broadcasts.

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};
use winwin_common::{ButtonStates, Event, EventBus, WinwinError};

use crate::commands::{Ack, Broadcast, Request};
use crate::orchestrator::OrchestratorHandle;

pub struct PopupController {
    handle: OrchestratorHandle,
    events: broadcast::Receiver<Event>,
    states: ButtonStates,
    closed: bool,
}

impl PopupController {
    /// Open the popup and ask for the current button states. The bus is
    /// subscribed before the request goes out so the answer is not missed.
    pub async fn open(handle: OrchestratorHandle, bus: &EventBus) -> Result<Self, WinwinError> {
        let mut popup = Self {
            handle,
            events: bus.subscribe(),
            states: ButtonStates::default(),
            closed: false,
        };
        popup.handle.send(Request::CheckWindowState).await?;
        popup.poll_events();
        Ok(popup)
    }

    pub fn split_enabled(&self) -> bool {
        self.states.split_tabs_enabled
    }

    pub fn merge_enabled(&self) -> bool {
        self.states.merge_windows_enabled
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn apply(&mut self, message: Broadcast) {
        match message {
            Broadcast::UpdateButtonStates(states) => self.states = states,
        }
    }

    /// Apply every broadcast received since the last poll. Returns how many
    /// were applied.
    pub fn poll_events(&mut self) -> usize {
        let mut applied = 0;
        loop {
            match self.events.try_recv() {
                Ok(event) => {
                    if let Some(message) = Broadcast::from_event(&event) {
                        self.apply(message);
                        applied += 1;
                    }
                }
                Err(TryRecvError::Lagged(n)) => warn!("popup missed {n} events"),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
        applied
    }

    /// Returns `None` if the button is disabled or the popup already closed.
    pub async fn click_split(&mut self) -> Result<Option<Ack>, WinwinError> {
        let enabled = self.split_enabled();
        self.click(Request::SplitTabs, enabled).await
    }

    pub async fn click_merge(&mut self) -> Result<Option<Ack>, WinwinError> {
        let enabled = self.merge_enabled();
        self.click(Request::MergeWindows, enabled).await
    }

    async fn click(&mut self, request: Request, enabled: bool) -> Result<Option<Ack>, WinwinError> {
        if self.closed || !enabled {
            debug!(?request, "ignoring click on disabled button");
            return Ok(None);
        }
        let result = self.handle.send(request).await;
        // The popup goes away once the command finished, whatever the outcome.
        self.closed = true;
        result.map(Some)
    }
}
