//! The host windowing API the orchestrator drives.
//!
//! A host owns windows and tabs; the orchestrator only asks it to enumerate,
//! create, move, resize and remove them. [`memory::MemoryHost`] is a complete
//! in-process host used by the binary and the tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use winwin_common::{Color, HostError, Rect, TabId, WindowId};

pub mod memory;

pub type Result<T> = std::result::Result<T, HostError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    pub window_id: WindowId,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub rect: Rect,
    pub focused: bool,
    /// Tabs in strip order.
    pub tabs: Vec<Tab>,
}

impl Window {
    pub fn tab_ids(&self) -> Vec<TabId> {
        self.tabs.iter().map(|t| t.id).collect()
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.active)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Display {
    pub bounds: Rect,
    /// Area available to windows, excluding OS-reserved regions.
    pub work_area: Rect,
}

/// Tab and window lifecycle notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    TabCreated(TabId),
    TabRemoved(TabId),
    TabUpdated(TabId),
    WindowCreated(WindowId),
    WindowRemoved(WindowId),
}

impl HostEvent {
    /// Whether the set of open windows changed.
    pub fn affects_windows(&self) -> bool {
        matches!(self, HostEvent::WindowCreated(_) | HostEvent::WindowRemoved(_))
    }
}

/// Names of host calls, used for logging and fault injection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostOp {
    CurrentWindow,
    AllWindows,
    GetWindow,
    CreateWindow,
    MoveTabs,
    QueryTabs,
    UpdateWindow,
    RemoveWindow,
    Displays,
    SetBadge,
}

impl HostOp {
    pub fn name(&self) -> &'static str {
        match self {
            HostOp::CurrentWindow => "current_window",
            HostOp::AllWindows => "all_windows",
            HostOp::GetWindow => "get_window",
            HostOp::CreateWindow => "create_window",
            HostOp::MoveTabs => "move_tabs",
            HostOp::QueryTabs => "query_tabs",
            HostOp::UpdateWindow => "update_window",
            HostOp::RemoveWindow => "remove_window",
            HostOp::Displays => "displays",
            HostOp::SetBadge => "set_badge",
        }
    }
}

#[async_trait]
pub trait WindowHost: Send + Sync {
    /// The focused window with its tabs, if one can be resolved.
    async fn current_window(&self) -> Result<Option<Window>>;

    /// Every open window with its tabs, in host order.
    async fn all_windows(&self) -> Result<Vec<Window>>;

    /// Fresh lookup; `None` once the window is gone.
    async fn window(&self, id: WindowId) -> Result<Option<Window>>;

    /// Open a window. With a seed tab, the tab is moved into the new window
    /// as part of creation; without one the window starts empty.
    async fn create_window(&self, seed: Option<TabId>) -> Result<Window>;

    /// Append `tabs`, in the given order, to the end of `target`'s strip.
    /// A window left without tabs is closed by the host.
    async fn move_tabs(&self, tabs: &[TabId], target: WindowId) -> Result<()>;

    /// Tabs of one window, or of all windows when `window` is `None`.
    /// A window that no longer exists has no tabs.
    async fn tabs(&self, window: Option<WindowId>) -> Result<Vec<Tab>>;

    /// Apply geometry and return the window as the host laid it out.
    async fn update_window(&self, id: WindowId, rect: Rect) -> Result<Window>;

    async fn remove_window(&self, id: WindowId) -> Result<()>;

    /// Attached displays, primary first.
    async fn displays(&self) -> Result<Vec<Display>>;

    /// Set the action badge; `None` clears it.
    async fn set_badge_text(&self, text: Option<String>) -> Result<()>;

    async fn set_badge_color(&self, color: Color) -> Result<()>;

    fn subscribe(&self) -> broadcast::Receiver<HostEvent>;
}
