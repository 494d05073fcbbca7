//! Window arrangement for a tabbed host: split the focused window's tabs
//! into two side-by-side windows, merge every window back into one, keep a
//! tab-count badge current, and tell the popup which buttons make sense.

pub mod commands;
pub mod layout;
pub mod orchestrator;
pub mod partition;
pub mod platform;
pub mod popup;

pub use commands::{Ack, Broadcast, Request};
pub use orchestrator::{
    ArrangeSettings, Envelope, MergeOutcome, Orchestrator, OrchestratorHandle, SplitOutcome,
};
pub use platform::memory::MemoryHost;
pub use platform::{Display, HostEvent, HostOp, Tab, Window, WindowHost};
pub use popup::PopupController;
