use serde::{Deserialize, Serialize};
use std::fmt;

/// Window or work-area geometry in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WindowId(pub u32);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TabId(pub u32);

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Left/right width fractions of the last split. Always sums to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplitRatio {
    pub left: f64,
    pub right: f64,
}

impl SplitRatio {
    pub fn with_left(left: f64) -> Self {
        Self {
            left,
            right: 1.0 - left,
        }
    }

    /// Normalize two pixel widths into fractions of their sum.
    pub fn from_widths(left: i32, right: i32) -> Option<Self> {
        if left < 0 || right < 0 || left + right <= 0 {
            return None;
        }
        let total = f64::from(left + right);
        Some(Self {
            left: f64::from(left) / total,
            right: f64::from(right) / total,
        })
    }

    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.right.is_finite()
            && self.left > 0.0
            && self.right > 0.0
            && (self.left + self.right - 1.0).abs() < 1e-6
    }

    /// Split `total` pixels; the right side absorbs rounding so the two
    /// widths always add up to `total`.
    pub fn widths(&self, total: i32) -> (i32, i32) {
        let left = (f64::from(total) * self.left).round() as i32;
        let left = left.clamp(0, total.max(0));
        (left, total - left)
    }
}

impl Default for SplitRatio {
    fn default() -> Self {
        Self {
            left: 0.4,
            right: 0.6,
        }
    }
}

/// Enabled flags for the popup's split and merge buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonStates {
    pub split_tabs_enabled: bool,
    pub merge_windows_enabled: bool,
}

impl ButtonStates {
    pub fn from_window_count(count: usize) -> Self {
        Self {
            split_tabs_enabled: count == 1,
            merge_windows_enabled: count > 1,
        }
    }
}
