//! In-process host with browser-like window and tab semantics.
//!
//! Windows own ordered tab strips; moving the last tab out of a window
//! closes it, new windows take focus, and every mutation is announced on
//! the event channel. Individual operations can be made to fail so the
//! orchestrator's abort paths can be exercised.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::sync::broadcast;
use winwin_common::{Color, HostError, Rect, TabId, WindowId};

use super::{Display, HostEvent, HostOp, Result, Tab, Window, WindowHost};

const EVENT_CAPACITY: usize = 256;

struct TabRecord {
    id: TabId,
    active: bool,
}

struct WindowRecord {
    id: WindowId,
    rect: Rect,
    tabs: Vec<TabRecord>,
}

impl WindowRecord {
    fn to_window(&self, focused: Option<WindowId>) -> Window {
        Window {
            id: self.id,
            rect: self.rect,
            focused: focused == Some(self.id),
            tabs: self
                .tabs
                .iter()
                .map(|t| Tab {
                    id: t.id,
                    window_id: self.id,
                    active: t.active,
                })
                .collect(),
        }
    }

    /// Keep exactly one active tab if the strip is non-empty.
    fn repair_active(&mut self, near: usize) {
        if self.tabs.is_empty() || self.tabs.iter().any(|t| t.active) {
            return;
        }
        let index = near.min(self.tabs.len() - 1);
        self.tabs[index].active = true;
    }
}

#[derive(Default)]
struct HostState {
    windows: Vec<WindowRecord>,
    displays: Vec<Display>,
    focused: Option<WindowId>,
    next_window: u32,
    next_tab: u32,
    badge_text: Option<String>,
    badge_color: Option<Color>,
    failing: HashSet<HostOp>,
    pending: Vec<HostEvent>,
}

impl HostState {
    fn check(&self, op: HostOp) -> Result<()> {
        if self.failing.contains(&op) {
            return Err(HostError::Rejected {
                op: op.name(),
                reason: "injected failure".into(),
            });
        }
        Ok(())
    }

    fn position(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    fn locate_tab(&self, id: TabId) -> Option<(usize, usize)> {
        self.windows.iter().enumerate().find_map(|(wi, w)| {
            w.tabs
                .iter()
                .position(|t| t.id == id)
                .map(|ti| (wi, ti))
        })
    }

    fn alloc_window(&mut self) -> WindowId {
        self.next_window += 1;
        WindowId(self.next_window)
    }

    fn alloc_tab(&mut self) -> TabId {
        self.next_tab += 1;
        TabId(self.next_tab)
    }

    fn cascade_rect(&self, id: WindowId) -> Rect {
        let work = self
            .displays
            .first()
            .map(|d| d.work_area)
            .unwrap_or_else(|| Rect::new(0, 0, 1280, 800));
        let offset = 24 * (id.0 % 10) as i32;
        Rect::new(
            work.x + offset,
            work.y + offset,
            work.width / 2,
            work.height / 2,
        )
    }

    /// Take a tab out of its window, closing the window if it empties.
    fn detach(&mut self, id: TabId) -> Result<TabRecord> {
        let (wi, ti) = self.locate_tab(id).ok_or(HostError::TabNotFound(id))?;
        let window = &mut self.windows[wi];
        let mut record = window.tabs.remove(ti);
        window.repair_active(ti.saturating_sub(1));
        record.active = false;
        if window.tabs.is_empty() {
            let closed = window.id;
            self.drop_window(wi);
            self.pending.push(HostEvent::WindowRemoved(closed));
        }
        Ok(record)
    }

    fn drop_window(&mut self, index: usize) -> WindowRecord {
        let record = self.windows.remove(index);
        if self.focused == Some(record.id) {
            self.focused = self.windows.last().map(|w| w.id);
        }
        record
    }
}

/// Browser-like host held entirely in memory.
pub struct MemoryHost {
    state: Mutex<HostState>,
    events: broadcast::Sender<HostEvent>,
}

impl MemoryHost {
    /// A host with one display and no windows.
    pub fn new(screen: Rect) -> Self {
        Self::with_displays(vec![Display {
            bounds: screen,
            work_area: screen,
        }])
    }

    pub fn with_displays(displays: Vec<Display>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: Mutex::new(HostState {
                displays,
                ..HostState::default()
            }),
            events,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HostState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self, mut state: MutexGuard<'_, HostState>) {
        let pending = std::mem::take(&mut state.pending);
        drop(state);
        for event in pending {
            let _ = self.events.send(event);
        }
    }

    /// Open a window with `tab_count` tabs, `active` marking the active one.
    /// The new window takes focus.
    pub fn add_window(&self, rect: Rect, tab_count: usize, active: usize) -> WindowId {
        let mut state = self.lock();
        let id = state.alloc_window();
        let mut tabs = Vec::with_capacity(tab_count);
        for index in 0..tab_count {
            let tab = state.alloc_tab();
            tabs.push(TabRecord {
                id: tab,
                active: index == active,
            });
            state.pending.push(HostEvent::TabCreated(tab));
        }
        let mut record = WindowRecord { id, rect, tabs };
        record.repair_active(active);
        state.windows.push(record);
        state.focused = Some(id);
        state.pending.push(HostEvent::WindowCreated(id));
        self.flush(state);
        id
    }

    /// Close a window the way a user would, bypassing fault injection.
    pub fn close_window(&self, id: WindowId) -> bool {
        let mut state = self.lock();
        let Some(index) = state.position(id) else {
            return false;
        };
        let record = state.drop_window(index);
        for tab in &record.tabs {
            state.pending.push(HostEvent::TabRemoved(tab.id));
        }
        state.pending.push(HostEvent::WindowRemoved(id));
        self.flush(state);
        true
    }

    pub fn focus(&self, id: WindowId) -> bool {
        let mut state = self.lock();
        if state.position(id).is_none() {
            return false;
        }
        state.focused = Some(id);
        true
    }

    /// Make `tab` the active tab of its window.
    pub fn activate(&self, tab: TabId) -> bool {
        let mut state = self.lock();
        let Some((wi, ti)) = state.locate_tab(tab) else {
            return false;
        };
        for (i, t) in state.windows[wi].tabs.iter_mut().enumerate() {
            t.active = i == ti;
        }
        state.pending.push(HostEvent::TabUpdated(tab));
        self.flush(state);
        true
    }

    /// Make every call of `op` fail until [`clear_failures`](Self::clear_failures).
    pub fn fail_op(&self, op: HostOp) {
        self.lock().failing.insert(op);
    }

    pub fn clear_failures(&self) {
        self.lock().failing.clear();
    }

    /// All windows in host order.
    pub fn snapshot(&self) -> Vec<Window> {
        let state = self.lock();
        state
            .windows
            .iter()
            .map(|w| w.to_window(state.focused))
            .collect()
    }

    pub fn badge_text(&self) -> Option<String> {
        self.lock().badge_text.clone()
    }

    pub fn badge_color(&self) -> Option<Color> {
        self.lock().badge_color
    }
}

#[async_trait]
impl WindowHost for MemoryHost {
    async fn current_window(&self) -> Result<Option<Window>> {
        let state = self.lock();
        state.check(HostOp::CurrentWindow)?;
        Ok(state
            .focused
            .and_then(|id| state.position(id))
            .map(|i| state.windows[i].to_window(state.focused)))
    }

    async fn all_windows(&self) -> Result<Vec<Window>> {
        let state = self.lock();
        state.check(HostOp::AllWindows)?;
        Ok(state
            .windows
            .iter()
            .map(|w| w.to_window(state.focused))
            .collect())
    }

    async fn window(&self, id: WindowId) -> Result<Option<Window>> {
        let state = self.lock();
        state.check(HostOp::GetWindow)?;
        Ok(state
            .position(id)
            .map(|i| state.windows[i].to_window(state.focused)))
    }

    async fn create_window(&self, seed: Option<TabId>) -> Result<Window> {
        let mut state = self.lock();
        state.check(HostOp::CreateWindow)?;

        let mut tabs = Vec::new();
        if let Some(tab) = seed {
            let mut record = state.detach(tab)?;
            record.active = true;
            tabs.push(record);
            state.pending.push(HostEvent::TabUpdated(tab));
        }

        let id = state.alloc_window();
        let rect = state.cascade_rect(id);
        state.windows.push(WindowRecord { id, rect, tabs });
        state.focused = Some(id);
        state.pending.push(HostEvent::WindowCreated(id));

        let window = state.windows[state.windows.len() - 1].to_window(state.focused);
        self.flush(state);
        Ok(window)
    }

    async fn move_tabs(&self, tabs: &[TabId], target: WindowId) -> Result<()> {
        let mut state = self.lock();
        state.check(HostOp::MoveTabs)?;

        if state.position(target).is_none() {
            return Err(HostError::WindowNotFound(target));
        }
        if let Some(missing) = tabs.iter().find(|t| state.locate_tab(**t).is_none()) {
            return Err(HostError::TabNotFound(*missing));
        }

        for &tab in tabs {
            let record = state.detach(tab)?;
            let index = state
                .position(target)
                .ok_or(HostError::WindowNotFound(target))?;
            let window = &mut state.windows[index];
            window.tabs.push(record);
            window.repair_active(0);
            state.pending.push(HostEvent::TabUpdated(tab));
        }

        self.flush(state);
        Ok(())
    }

    async fn tabs(&self, window: Option<WindowId>) -> Result<Vec<Tab>> {
        let state = self.lock();
        state.check(HostOp::QueryTabs)?;
        Ok(state
            .windows
            .iter()
            .filter(|w| window.is_none() || window == Some(w.id))
            .flat_map(|w| w.to_window(state.focused).tabs)
            .collect())
    }

    async fn update_window(&self, id: WindowId, rect: Rect) -> Result<Window> {
        let mut state = self.lock();
        state.check(HostOp::UpdateWindow)?;
        let index = state.position(id).ok_or(HostError::WindowNotFound(id))?;
        state.windows[index].rect = rect;
        Ok(state.windows[index].to_window(state.focused))
    }

    async fn remove_window(&self, id: WindowId) -> Result<()> {
        let mut state = self.lock();
        state.check(HostOp::RemoveWindow)?;
        let index = state.position(id).ok_or(HostError::WindowNotFound(id))?;
        let record = state.drop_window(index);
        for tab in &record.tabs {
            state.pending.push(HostEvent::TabRemoved(tab.id));
        }
        state.pending.push(HostEvent::WindowRemoved(id));
        self.flush(state);
        Ok(())
    }

    async fn displays(&self) -> Result<Vec<Display>> {
        let state = self.lock();
        state.check(HostOp::Displays)?;
        Ok(state.displays.clone())
    }

    async fn set_badge_text(&self, text: Option<String>) -> Result<()> {
        let mut state = self.lock();
        state.check(HostOp::SetBadge)?;
        state.badge_text = text;
        Ok(())
    }

    async fn set_badge_color(&self, color: Color) -> Result<()> {
        let mut state = self.lock();
        state.check(HostOp::SetBadge)?;
        state.badge_color = Some(color);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.events.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 1920, 1080)
    }

    fn ids(window: &Window) -> Vec<u32> {
        window.tabs.iter().map(|t| t.id.0).collect()
    }

    #[tokio::test]
    async fn add_window_takes_focus() {
        let host = MemoryHost::new(screen());
        let a = host.add_window(screen(), 2, 0);
        let b = host.add_window(screen(), 1, 0);
        let current = host.current_window().await.unwrap().unwrap();
        assert_eq!(current.id, b);
        assert!(host.focus(a));
        assert_eq!(host.current_window().await.unwrap().unwrap().id, a);
    }

    #[tokio::test]
    async fn add_window_marks_one_active_tab() {
        let host = MemoryHost::new(screen());
        host.add_window(screen(), 3, 1);
        let win = host.current_window().await.unwrap().unwrap();
        assert_eq!(win.active_index(), Some(1));
        assert_eq!(win.tabs.iter().filter(|t| t.active).count(), 1);
    }

    #[tokio::test]
    async fn create_with_seed_moves_tab() {
        let host = MemoryHost::new(screen());
        let source = host.add_window(screen(), 2, 1);
        let seed = host.snapshot()[0].tabs[1].id;

        let created = host.create_window(Some(seed)).await.unwrap();
        assert_eq!(created.tab_ids(), vec![seed]);
        assert!(created.tabs[0].active);

        let src = host.window(source).await.unwrap().unwrap();
        assert_eq!(src.tabs.len(), 1);
        assert!(src.tabs[0].active);
    }

    #[tokio::test]
    async fn create_without_seed_is_empty() {
        let host = MemoryHost::new(screen());
        let created = host.create_window(None).await.unwrap();
        assert!(created.tabs.is_empty());
        assert!(created.focused);
    }

    #[tokio::test]
    async fn moving_last_tab_closes_window() {
        let host = MemoryHost::new(screen());
        let a = host.add_window(screen(), 1, 0);
        let b = host.add_window(screen(), 2, 0);
        let tab = host.window(a).await.unwrap().unwrap().tabs[0].id;

        host.move_tabs(&[tab], b).await.unwrap();
        assert!(host.window(a).await.unwrap().is_none());
        let target = host.window(b).await.unwrap().unwrap();
        assert_eq!(target.tabs.len(), 3);
        assert_eq!(target.tabs[2].id, tab);
        assert!(!target.tabs[2].active);
    }

    #[tokio::test]
    async fn move_appends_in_given_order() {
        let host = MemoryHost::new(screen());
        let a = host.add_window(screen(), 3, 0);
        let b = host.add_window(screen(), 1, 0);
        let src = host.window(a).await.unwrap().unwrap();
        let moving = vec![src.tabs[2].id, src.tabs[1].id];

        host.move_tabs(&moving, b).await.unwrap();
        let target = host.window(b).await.unwrap().unwrap();
        assert_eq!(&ids(&target)[1..], &[moving[0].0, moving[1].0]);
    }

    #[tokio::test]
    async fn move_with_unknown_tab_changes_nothing() {
        let host = MemoryHost::new(screen());
        let a = host.add_window(screen(), 2, 0);
        let b = host.add_window(screen(), 1, 0);
        let first = host.window(a).await.unwrap().unwrap().tabs[0].id;

        let err = host.move_tabs(&[first, TabId(999)], b).await.unwrap_err();
        assert_eq!(err, HostError::TabNotFound(TabId(999)));
        assert_eq!(host.window(a).await.unwrap().unwrap().tabs.len(), 2);
    }

    #[tokio::test]
    async fn tabs_of_missing_window_is_empty() {
        let host = MemoryHost::new(screen());
        host.add_window(screen(), 2, 0);
        assert!(host.tabs(Some(WindowId(42))).await.unwrap().is_empty());
        assert_eq!(host.tabs(None).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_missing_window_fails() {
        let host = MemoryHost::new(screen());
        let err = host
            .update_window(WindowId(9), screen())
            .await
            .unwrap_err();
        assert_eq!(err, HostError::WindowNotFound(WindowId(9)));
    }

    #[tokio::test]
    async fn injected_failure_until_cleared() {
        let host = MemoryHost::new(screen());
        host.fail_op(HostOp::AllWindows);
        assert!(matches!(
            host.all_windows().await,
            Err(HostError::Rejected { op: "all_windows", .. })
        ));
        host.clear_failures();
        assert!(host.all_windows().await.is_ok());
    }

    #[tokio::test]
    async fn close_window_emits_events() {
        let host = MemoryHost::new(screen());
        let a = host.add_window(screen(), 1, 0);
        let mut rx = host.subscribe();

        assert!(host.close_window(a));
        assert!(matches!(rx.recv().await.unwrap(), HostEvent::TabRemoved(_)));
        assert_eq!(rx.recv().await.unwrap(), HostEvent::WindowRemoved(a));
        assert!(!host.close_window(a));
        assert!(host.current_window().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn badge_is_recorded() {
        let host = MemoryHost::new(screen());
        host.set_badge_text(Some("3".into())).await.unwrap();
        host.set_badge_color(Color::from_rgba(1, 2, 3, 255))
            .await
            .unwrap();
        assert_eq!(host.badge_text().as_deref(), Some("3"));
        assert_eq!(host.badge_color(), Some(Color::from_rgba(1, 2, 3, 255)));
    }
}
