//! Reading `config.toml` into a [`SplittermConfig`].

use crate::schema::SplittermConfig;
use crate::validation;
use splitterm_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Parse the file at `path`. Sections and keys it omits keep their defaults.
///
/// Out-of-range values only produce a warning here; [`crate::load_config_from`]
/// is the strict entry point.
pub fn load_from_path(path: &Path) -> Result<SplittermConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("could not read {}: {e}", path.display())),
    })?;

    let config: SplittermConfig = toml::from_str(&text)
        .map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))?;

    if let Err(e) = validation::validate(&config) {
        warn!("{}: {e}", path.display());
    }

    info!("config read from {}", path.display());
    Ok(config)
}

/// Read the per-user config, seeding the starter template the first time.
pub fn load_default() -> Result<SplittermConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            create_default_config(&path)?;
            Ok(SplittermConfig::default())
        }
        loaded => loaded,
    }
}
