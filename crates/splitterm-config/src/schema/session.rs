//! Session manager tuning.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Quiet interval before a coalesced pixel resize fires (valid range: 0-5000 ms).
    pub resize_quiet_ms: u64,
    /// Sequence written before each search match in displayed output.
    pub highlight_prefix: String,
    /// Sequence written after each search match.
    pub highlight_suffix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            resize_quiet_ms: 250,
            highlight_prefix: "\u{1b}[30;43m".into(),
            highlight_suffix: "\u{1b}[0m".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.resize_quiet_ms, 250);
        assert_eq!(config.highlight_prefix, "\x1b[30;43m");
        assert_eq!(config.highlight_suffix, "\x1b[0m");
    }
}
