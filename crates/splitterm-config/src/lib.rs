//! splitterm configuration.
//!
//! TOML-based configuration with full validation. Every section uses serde
//! defaults so a partial `config.toml` works out of the box.
//!
//! ```rust,no_run
//! use splitterm_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("{} scrollback lines", config.terminal.scrollback_lines);
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{SplittermConfig, CONFIG_SCHEMA_VERSION};

use splitterm_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<SplittermConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path and validate it.
pub fn load_config_from(path: &Path) -> Result<SplittermConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &SplittermConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&SplittermConfig::default());
        assert!(json.contains("\"terminal\""));
        assert!(json.contains("\"session\""));
        assert!(json.contains("\"shell\""));
        assert!(json.contains("\"state\""));
        assert!(json.contains("\"logging\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[terminal]\ncols = 0\n").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
        assert!(err.to_string().contains("terminal.cols"));
    }
}
