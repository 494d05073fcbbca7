//! Screen geometry for splits and merges.

use winwin_common::{HostError, Rect, SplitRatio};

use crate::platform::{Display, Window};

/// Work area of the primary (first) display.
pub fn primary_work_area(displays: &[Display]) -> Result<Rect, HostError> {
    displays
        .first()
        .map(|d| d.work_area)
        .ok_or(HostError::NoDisplay)
}

/// Left and right frames for a split. The left frame starts at the work
/// area's origin; the right one starts where the left one ends, and the
/// two widths add up to the work-area width.
pub fn split_frames(work: Rect, ratio: SplitRatio) -> (Rect, Rect) {
    let (left_width, right_width) = ratio.widths(work.width);
    let left = Rect::new(work.x, work.y, left_width, work.height);
    let right = Rect::new(left.right(), work.y, right_width, work.height);
    (left, right)
}

/// Frame for the merged window: `fraction` of the work-area width,
/// flush with its right edge, full height.
pub fn merge_frame(work: Rect, fraction: f64) -> Rect {
    let width = (f64::from(work.width) * fraction).round() as i32;
    let width = width.clamp(0, work.width.max(0));
    Rect::new(work.right() - width, work.y, width, work.height)
}

/// The window furthest to the right. Only a strictly greater left offset
/// replaces the current pick, so ties go to the first window seen.
pub fn rightmost(windows: &[Window]) -> Option<&Window> {
    let mut best: Option<&Window> = None;
    for window in windows {
        match best {
            Some(current) if window.rect.x <= current.rect.x => {}
            _ => best = Some(window),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use winwin_common::WindowId;

    fn work() -> Rect {
        Rect::new(0, 0, 1920, 1040)
    }

    fn window(id: u32, x: i32) -> Window {
        Window {
            id: WindowId(id),
            rect: Rect::new(x, 0, 800, 600),
            focused: false,
            tabs: Vec::new(),
        }
    }

    #[test]
    fn split_default_is_forty_sixty() {
        let (left, right) = split_frames(work(), SplitRatio::default());
        assert_eq!(left, Rect::new(0, 0, 768, 1040));
        assert_eq!(right, Rect::new(768, 0, 1152, 1040));
    }

    #[test]
    fn split_widths_fill_odd_screens() {
        for width in [1365, 1366, 1441, 2559] {
            let area = Rect::new(0, 0, width, 900);
            let (left, right) = split_frames(area, SplitRatio::with_left(0.37));
            assert_eq!(left.width + right.width, width);
            assert_eq!(right.x, left.width);
        }
    }

    #[test]
    fn split_respects_work_area_origin() {
        let area = Rect::new(0, 25, 1440, 875);
        let (left, right) = split_frames(area, SplitRatio::with_left(0.5));
        assert_eq!(left, Rect::new(0, 25, 720, 875));
        assert_eq!(right, Rect::new(720, 25, 720, 875));
    }

    #[test]
    fn merge_is_right_aligned() {
        let frame = merge_frame(work(), 0.6);
        assert_eq!(frame, Rect::new(768, 0, 1152, 1040));
        assert_eq!(frame.right(), 1920);
    }

    #[test]
    fn offset_work_area_keeps_frames_inside_it() {
        // Dock on the left edge.
        let area = Rect::new(64, 0, 1856, 1080);
        let (left, right) = split_frames(area, SplitRatio::with_left(0.5));
        assert_eq!(left, Rect::new(64, 0, 928, 1080));
        assert_eq!(right.right(), 1920);

        let merged = merge_frame(area, 0.5);
        assert_eq!(merged, Rect::new(992, 0, 928, 1080));
    }

    #[test]
    fn merge_full_width() {
        assert_eq!(merge_frame(work(), 1.0), work());
    }

    #[test]
    fn primary_is_first_display() {
        let displays = vec![
            Display {
                bounds: Rect::new(0, 0, 1920, 1080),
                work_area: work(),
            },
            Display {
                bounds: Rect::new(1920, 0, 1280, 1024),
                work_area: Rect::new(1920, 0, 1280, 1024),
            },
        ];
        assert_eq!(primary_work_area(&displays).unwrap(), work());
        assert_eq!(primary_work_area(&[]), Err(HostError::NoDisplay));
    }

    #[test]
    fn rightmost_picks_largest_offset() {
        let windows = vec![window(1, 0), window(2, 768), window(3, 100)];
        assert_eq!(rightmost(&windows).unwrap().id, WindowId(2));
    }

    #[test]
    fn rightmost_tie_goes_to_first_seen() {
        let windows = vec![window(1, 0), window(2, 500), window(3, 500)];
        assert_eq!(rightmost(&windows).unwrap().id, WindowId(2));
    }

    #[test]
    fn rightmost_handles_negative_offsets() {
        let windows = vec![window(1, -1200), window(2, -300)];
        assert_eq!(rightmost(&windows).unwrap().id, WindowId(2));
        assert!(rightmost(&[]).is_none());
    }
}
