use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` filter directive for the winwin crates.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "winwin=trace",
            LogLevel::Debug => "winwin=debug",
            LogLevel::Info => "winwin=info",
            LogLevel::Warn => "winwin=warn",
            LogLevel::Error => "winwin=error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_level_serialization() {
        let json = serde_json::to_string(&LogLevel::Warn).unwrap();
        assert_eq!(json, "\"warn\"");
        let level: LogLevel = serde_json::from_str("\"debug\"").unwrap();
        assert_eq!(level, LogLevel::Debug);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(toml::from_str::<LoggingConfig>("level = \"loud\"").is_err());
    }

    #[test]
    fn directive_names_the_crate() {
        assert_eq!(LogLevel::Info.directive(), "winwin=info");
    }
}
