//! winwin configuration.
//!
//! TOML-based configuration with validation and serde defaults, so a
//! partial file (or none at all) works out of the box. Also owns the
//! durable store for the last-used split ratio.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use winwin_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config.badge.background_color);
//! ```

pub mod ratio_store;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use ratio_store::{FileRatioStore, MemoryRatioStore, RatioStore};
pub use schema::{WinwinConfig, CONFIG_SCHEMA_VERSION};

use winwin_common::ConfigError;

/// Load config from the platform default path, creating it if missing.
pub fn load_config() -> Result<WinwinConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
