//! The Orchestrator owns split, merge, resize, the tab-count badge and the
//! button-state broadcast.

mod event_loop;
mod merge;
mod resize;
mod split;
mod state;
mod types;


pub use event_loop::{Envelope, OrchestratorHandle};
pub use types::*;
