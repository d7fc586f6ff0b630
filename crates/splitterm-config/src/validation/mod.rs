//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;
mod session;
mod terminal;

#[cfg(test)]
mod tests;

use crate::schema::SplittermConfig;
use splitterm_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &SplittermConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    terminal::validate_terminal(&mut errors, config);
    session::validate_session(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
