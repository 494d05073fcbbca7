//! Startup wiring: config, ratio store and the simulated host.

use std::path::Path;
use std::sync::Arc;

use winwin_common::{ConfigError, Rect};
use winwin_config::{FileRatioStore, MemoryRatioStore, RatioStore, WinwinConfig};
use winwin_tiling::MemoryHost;

/// Config from `path` if given, else the platform default. Any failure is
/// returned alongside the defaults so it can be logged once logging is up.
pub fn load_config(path: Option<&Path>) -> (WinwinConfig, Option<ConfigError>) {
    let result = match path {
        Some(path) => winwin_config::toml_loader::load_from_path(path),
        None => winwin_config::load_config(),
    };
    match result {
        Ok(config) => (config, None),
        Err(e) => (WinwinConfig::default(), Some(e)),
    }
}

pub fn ratio_store(path: Option<&Path>) -> Arc<dyn RatioStore> {
    if let Some(path) = path {
        return Arc::new(FileRatioStore::new(path));
    }
    match FileRatioStore::at_default_path() {
        Ok(store) => {
            tracing::debug!(path = %store.path().display(), "using split ratio file");
            Arc::new(store)
        }
        Err(e) => {
            tracing::warn!("no config directory ({e}), split ratio will not persist");
            Arc::new(MemoryRatioStore::new())
        }
    }
}

/// A host on `screen` with one window per entry of `windows`, each holding
/// that many tabs with the last one active. No entries means one window
/// with a single tab.
pub fn build_host(screen: Rect, windows: &[usize]) -> MemoryHost {
    let host = MemoryHost::new(screen);
    let counts: &[usize] = if windows.is_empty() { &[1] } else { windows };
    for (i, &tabs) in counts.iter().enumerate() {
        let offset = 40 * i as i32;
        let rect = Rect::new(
            screen.x + offset,
            screen.y + offset,
            screen.width / 2,
            screen.height / 2,
        );
        let id = host.add_window(rect, tabs, tabs.saturating_sub(1));
        tracing::debug!(window = %id, tabs, "opened startup window");
    }
    host
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_host_defaults_to_one_tab() {
        let host = build_host(Rect::new(0, 0, 1000, 800), &[]);
        let windows = host.snapshot();
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].tabs.len(), 1);
    }

    #[test]
    fn build_host_opens_requested_windows() {
        let host = build_host(Rect::new(0, 0, 1000, 800), &[3, 2]);
        let windows = host.snapshot();
        assert_eq!(windows.len(), 2);
        assert_eq!(windows[0].tabs.len(), 3);
        assert_eq!(windows[0].active_index(), Some(2));
        assert_eq!(windows[1].rect, Rect::new(40, 40, 500, 400));
        assert!(windows[1].focused);
    }

    #[test]
    fn missing_config_override_falls_back() {
        let (config, err) = load_config(Some(Path::new("/nonexistent/winwin.toml")));
        assert!(matches!(err, Some(ConfigError::FileNotFound(_))));
        assert_eq!(config.merge.target_width, WinwinConfig::default().merge.target_width);
    }
}
