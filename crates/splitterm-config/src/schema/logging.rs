//! Logging configuration types.

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
    /// `tracing_subscriber` filter directive for the splitterm crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "splitterm=trace",
            LogLevel::Debug => "splitterm=debug",
            LogLevel::Info => "splitterm=info",
            LogLevel::Warn => "splitterm=warn",
            LogLevel::Error => "splitterm=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
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
        let level: LogLevel = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(level, LogLevel::Trace);
    }

    #[test]
    fn log_level_directive() {
        assert_eq!(LogLevel::default().directive(), "splitterm=info");
        assert_eq!(LogLevel::Debug.directive(), "splitterm=debug");
    }
}
