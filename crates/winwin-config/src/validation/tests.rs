//! Tests for the validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    assert!(validate(&WinwinConfig::default()).is_ok());
}

#[test]
fn catches_split_left_too_large() {
    let mut config = WinwinConfig::default();
    config.split.default_left = 0.95;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("split.default_left"));
}

#[test]
fn catches_nan_split_left() {
    let mut config = WinwinConfig::default();
    config.split.default_left = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("split.default_left"));
}

#[test]
fn catches_merge_width_zero() {
    let mut config = WinwinConfig::default();
    config.merge.target_width = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("merge.target_width"));
}

#[test]
fn catches_bad_badge_color() {
    let mut config = WinwinConfig::default();
    config.badge.background_color = "grey".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("badge.background_color"));
}

#[test]
fn catches_zero_refresh_interval() {
    let mut config = WinwinConfig::default();
    config.badge.refresh_interval_secs = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("badge.refresh_interval_secs"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WinwinConfig::default();
    config.split.default_left = 2.0;
    config.badge.background_color = "nope".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("split.default_left"));
    assert!(err.contains("badge.background_color"));
    assert!(err.contains("; "));
}
