mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_right_edge() {
        let r = Rect::new(100, 0, 800, 600);
        assert_eq!(r.right(), 900);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0, 0, 1920, 1080);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn ids_display() {
        assert_eq!(WindowId(4).to_string(), "4");
        assert_eq!(TabId(12).to_string(), "12");
    }

    #[test]
    fn ids_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(TabId(1));
        set.insert(TabId(2));
        set.insert(TabId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn split_ratio_default_is_forty_sixty() {
        let ratio = SplitRatio::default();
        assert!((ratio.left - 0.4).abs() < f64::EPSILON);
        assert!((ratio.right - 0.6).abs() < f64::EPSILON);
        assert!(ratio.is_valid());
    }

    #[test]
    fn split_ratio_with_left_complements() {
        let ratio = SplitRatio::with_left(0.25);
        assert!((ratio.right - 0.75).abs() < f64::EPSILON);
        assert!(ratio.is_valid());
    }

    #[test]
    fn split_ratio_from_widths_normalizes() {
        let ratio = SplitRatio::from_widths(768, 1152).unwrap();
        assert!((ratio.left - 0.4).abs() < 1e-9);
        assert!((ratio.left + ratio.right - 1.0).abs() < 1e-9);
    }

    #[test]
    fn split_ratio_from_zero_widths_is_none() {
        assert!(SplitRatio::from_widths(0, 0).is_none());
        assert!(SplitRatio::from_widths(-10, 5).is_none());
    }

    #[test]
    fn split_ratio_widths_cover_total() {
        let ratio = SplitRatio::default();
        for total in [1000, 1001, 1366, 1919, 2560] {
            let (left, right) = ratio.widths(total);
            assert_eq!(left + right, total);
        }
        assert_eq!(ratio.widths(1920), (768, 1152));
    }

    #[test]
    fn split_ratio_invalid_values() {
        assert!(!SplitRatio { left: 0.7, right: 0.7 }.is_valid());
        assert!(!SplitRatio { left: 1.0, right: 0.0 }.is_valid());
        assert!(!SplitRatio { left: f64::NAN, right: 0.5 }.is_valid());
    }

    #[test]
    fn split_ratio_json_shape() {
        let json = serde_json::to_string(&SplitRatio::with_left(0.5)).unwrap();
        assert_eq!(json, r#"{"left":0.5,"right":0.5}"#);
    }

    #[test]
    fn button_states_follow_window_count() {
        assert_eq!(
            ButtonStates::from_window_count(0),
            ButtonStates {
                split_tabs_enabled: false,
                merge_windows_enabled: false
            }
        );
        assert_eq!(
            ButtonStates::from_window_count(1),
            ButtonStates {
                split_tabs_enabled: true,
                merge_windows_enabled: false
            }
        );
        for count in 2..6 {
            assert_eq!(
                ButtonStates::from_window_count(count),
                ButtonStates {
                    split_tabs_enabled: false,
                    merge_windows_enabled: true
                }
            );
        }
    }

    #[test]
    fn button_states_wire_names() {
        let json = serde_json::to_string(&ButtonStates::from_window_count(1)).unwrap();
        assert_eq!(
            json,
            r#"{"splitTabsEnabled":true,"mergeWindowsEnabled":false}"#
        );
    }

    #[test]
    fn color_from_hex() {
        let c = Color::from_hex("#616161").unwrap();
        assert_eq!(c, Color::from_rgba(0x61, 0x61, 0x61, 255));
        assert_eq!(
            Color::from_hex("ff880080").unwrap(),
            Color::from_rgba(255, 136, 0, 128)
        );
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }
}
