pub mod errors;
pub mod events;
pub mod id;
pub mod types;

pub use errors::{ArrangeError, ConfigError, HostError, WinwinError};
pub use events::{Event, EventBus};
pub use id::new_correlation_id;
pub use types::{ButtonStates, Color, Rect, SplitRatio, TabId, WindowId};

pub type Result<T> = std::result::Result<T, WinwinError>;
