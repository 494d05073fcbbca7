use std::path::PathBuf;

use crate::types::{TabId, WindowId};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("storage error: {0}")]
    StorageError(String),
}

/// Failures reported by the host windowing API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("no window with id {0}")]
    WindowNotFound(WindowId),

    #[error("no tab with id {0}")]
    TabNotFound(TabId),

    #[error("no display available")]
    NoDisplay,

    #[error("{op} rejected: {reason}")]
    Rejected { op: &'static str, reason: String },
}

/// Why a split or merge stopped before completing.
#[derive(Debug, thiserror::Error)]
pub enum ArrangeError {
    #[error("no current window")]
    NoCurrentWindow,

    #[error("need at least two windows to merge, found {0}")]
    NotEnoughWindows(usize),

    #[error("{failed} of {total} windows failed to merge")]
    MergeFailed { failed: usize, total: usize },

    #[error(transparent)]
    Host(#[from] HostError),
}

#[derive(Debug, thiserror::Error)]
pub enum WinwinError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Arrange(#[from] ArrangeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
