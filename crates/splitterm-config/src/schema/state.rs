//! Where persisted layout state lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StateConfig {
    /// Layout store path. `None` means `<data dir>/splitterm/layouts.json`.
    pub layout_file: Option<PathBuf>,
}

impl StateConfig {
    /// Resolve the layout store path, if a data directory is available.
    pub fn layout_path(&self) -> Option<PathBuf> {
        match &self.layout_file {
            Some(path) => Some(path.clone()),
            None => dirs::data_dir().map(|d| d.join("splitterm").join("layouts.json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_layout_file_wins() {
        let config = StateConfig {
            layout_file: Some(PathBuf::from("/tmp/layouts.json")),
        };
        assert_eq!(config.layout_path(), Some(PathBuf::from("/tmp/layouts.json")));
    }
}
