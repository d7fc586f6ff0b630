//! Configuration schema types.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod logging;
mod session;
mod shell;
mod state;
mod terminal;

pub use logging::*;
pub use session::*;
pub use shell::*;
pub use state::*;
pub use terminal::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SplittermConfig {
    pub terminal: TerminalConfig,
    pub session: SessionConfig,
    pub shell: ShellConfig,
    pub state: StateConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_terminal_matches_classic_pane() {
        let config = SplittermConfig::default();
        assert_eq!(config.terminal.cols, 80);
        assert_eq!(config.terminal.rows, 24);
        assert_eq!(config.terminal.scrollback_lines, 10_000);
        assert_eq!(config.terminal.padding_px, 16.0);
        assert_eq!(config.terminal.footer_rows, 0);
    }

    #[test]
    fn default_config_session_quiet_interval() {
        let config = SplittermConfig::default();
        assert_eq!(config.session.resize_quiet_ms, 250);
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config: SplittermConfig = toml::from_str("").unwrap();
        assert_eq!(config.terminal.cols, 80);
        assert_eq!(config.logging.level, LogLevel::Info);
        assert!(config.state.layout_file.is_none());
    }

    #[test]
    fn partial_toml_keeps_other_sections() {
        let toml_str = r#"
[terminal]
cols = 132
footer_rows = 3

[logging]
level = "debug"
"#;
        let config: SplittermConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.terminal.cols, 132);
        assert_eq!(config.terminal.footer_rows, 3);
        assert_eq!(config.terminal.rows, 24);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.session.resize_quiet_ms, 250);
    }
}
