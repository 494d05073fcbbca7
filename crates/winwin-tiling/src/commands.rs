//! Messages exchanged between the popup and the orchestrator.

use serde::{Deserialize, Serialize};
use winwin_common::{ButtonStates, Event};

/// Popup → orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    SplitTabs,
    MergeWindows,
    CheckWindowState,
}

/// Orchestrator → popup, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Broadcast {
    UpdateButtonStates(ButtonStates),
}

impl Broadcast {
    /// The wire message for a bus event, if it has one.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::ButtonStates(states) => Some(Broadcast::UpdateButtonStates(*states)),
            _ => None,
        }
    }
}

/// Completion signal for one request. Sent exactly once, whether or not
/// the operation succeeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(flatten)]
    pub request: Request,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl Ack {
    pub fn ok(request: Request) -> Self {
        Self {
            request,
            ok: true,
            error: None,
        }
    }

    pub fn failed(request: Request, error: impl Into<String>) -> Self {
        Self {
            request,
            ok: false,
            error: Some(error.into()),
        }
    }
}
