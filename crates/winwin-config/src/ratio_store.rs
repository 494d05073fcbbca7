//! Durable slot for the last-used split ratio.
//!
//! The ratio survives restarts as a tiny JSON document
//! (`{"left":0.4,"right":0.6}`) next to the config file. Writes are atomic
//! (write to `.tmp`, then rename).

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use winwin_common::{ConfigError, SplitRatio};

use crate::toml_loader::config_dir;

/// Key-value slot holding one [`SplitRatio`].
pub trait RatioStore: Send + Sync {
    /// The stored ratio, or `None` if nothing usable has been saved yet.
    fn load(&self) -> Result<Option<SplitRatio>, ConfigError>;
    fn save(&self, ratio: SplitRatio) -> Result<(), ConfigError>;
}

/// JSON-file backed store.
pub struct FileRatioStore {
    path: PathBuf,
}

impl FileRatioStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config_dir>/winwin/split_ratio.json`.
    pub fn at_default_path() -> Result<Self, ConfigError> {
        Ok(Self::new(config_dir()?.join("split_ratio.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RatioStore for FileRatioStore {
    fn load(&self) -> Result<Option<SplitRatio>, ConfigError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            ConfigError::StorageError(format!("failed to read {}: {e}", self.path.display()))
        })?;
        let ratio: SplitRatio = serde_json::from_str(&content).map_err(|e| {
            ConfigError::StorageError(format!("failed to parse {}: {e}", self.path.display()))
        })?;

        if !ratio.is_valid() {
            tracing::warn!(
                path = %self.path.display(),
                left = ratio.left,
                right = ratio.right,
                "ignoring stored split ratio that does not sum to 1"
            );
            return Ok(None);
        }
        Ok(Some(ratio))
    }

    fn save(&self, ratio: SplitRatio) -> Result<(), ConfigError> {
        let json = serde_json::to_string(&ratio)
            .map_err(|e| ConfigError::StorageError(format!("failed to serialize ratio: {e}")))?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::StorageError(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json).map_err(|e| {
            ConfigError::StorageError(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &self.path) {
            tracing::warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&self.path, &json).map_err(|e2| {
                ConfigError::StorageError(format!(
                    "failed to write {}: {e2}",
                    self.path.display()
                ))
            })?;
        }

        tracing::debug!(path = %self.path.display(), left = ratio.left, "split ratio saved");
        Ok(())
    }
}

/// Process-local store, for tests and hosts without a writable disk.
#[derive(Default)]
pub struct MemoryRatioStore {
    slot: Mutex<Option<SplitRatio>>,
}

impl MemoryRatioStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ratio(ratio: SplitRatio) -> Self {
        Self {
            slot: Mutex::new(Some(ratio)),
        }
    }
}

impl RatioStore for MemoryRatioStore {
    fn load(&self) -> Result<Option<SplitRatio>, ConfigError> {
        let slot = self
            .slot
            .lock()
            .map_err(|_| ConfigError::StorageError("ratio slot poisoned".into()))?;
        Ok(*slot)
    }

    fn save(&self, ratio: SplitRatio) -> Result<(), ConfigError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| ConfigError::StorageError("ratio slot poisoned".into()))?;
        *slot = Some(ratio);
        Ok(())
    }
}
