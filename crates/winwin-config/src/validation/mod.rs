//! Full configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError` so a user sees every problem at once.

mod helpers;

#[cfg(test)]
mod tests;

use winwin_common::{Color, ConfigError};

use crate::schema::WinwinConfig;

use helpers::{validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WinwinConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_range_f64(
        &mut errors,
        "split.default_left",
        config.split.default_left,
        0.1,
        0.9,
    );
    validate_range_f64(
        &mut errors,
        "merge.target_width",
        config.merge.target_width,
        0.1,
        1.0,
    );
    validate_badge(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_badge(errors: &mut Vec<String>, config: &WinwinConfig) {
    if Color::from_hex(&config.badge.background_color).is_none() {
        errors.push(format!(
            "badge.background_color = {:?} is not a hex color",
            config.badge.background_color
        ));
    }
    validate_range(
        errors,
        "badge.refresh_interval_secs",
        config.badge.refresh_interval_secs,
        1,
        3600,
    );
}
