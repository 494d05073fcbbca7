//! Which tabs leave the source window when it is split.

use winwin_common::TabId;

use crate::platform::Tab;

/// What a split does with the source window's tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitPlan {
    /// Nothing moves; an empty companion window is opened instead.
    Companion,
    /// `seed` opens the new window; `rest` follows it, in strip order.
    Move { seed: TabId, rest: Vec<TabId> },
}

impl SplitPlan {
    /// Every tab that leaves the source window, in strip order.
    pub fn moved(&self) -> Vec<TabId> {
        match self {
            SplitPlan::Companion => Vec::new(),
            SplitPlan::Move { seed, rest } => {
                let mut tabs = Vec::with_capacity(rest.len() + 1);
                tabs.push(*seed);
                tabs.extend(rest.iter().copied());
                tabs
            }
        }
    }
}

/// Partition a window's tabs (in strip order) for a split.
///
/// - 0 or 1 tab: [`SplitPlan::Companion`]
/// - 2 tabs: only the active tab moves
/// - 3+ tabs: the active tab and every tab after it move
///
/// A strip with no active tab is treated as if its first tab were active.
pub fn plan_split(tabs: &[Tab]) -> SplitPlan {
    if tabs.len() <= 1 {
        return SplitPlan::Companion;
    }
    let active = tabs.iter().position(|t| t.active).unwrap_or(0);
    let seed = tabs[active].id;
    let rest = if tabs.len() == 2 {
        Vec::new()
    } else {
        tabs[active + 1..].iter().map(|t| t.id).collect()
    };
    SplitPlan::Move { seed, rest }
}
