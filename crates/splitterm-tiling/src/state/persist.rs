//! Save and restore the layout forest as JSON.

use std::path::Path;

use splitterm_common::LayoutError;
use tracing::{info, warn};

use super::LayoutState;

impl LayoutState {
    /// Restore a forest saved by [`LayoutState::save_to_path`].
    ///
    /// A missing file yields the default forest.
    pub fn load_from_path(path: &Path) -> Result<Self, LayoutError> {
        if !path.exists() {
            info!("no layout store at {}, using default", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| LayoutError::Persist(format!("failed to read {}: {e}", path.display())))?;
        let state: LayoutState = serde_json::from_str(&content)
            .map_err(|e| LayoutError::Parse(format!("{}: {e}", path.display())))?;

        if !state.sizes_balanced() {
            warn!("layout store {} has unbalanced split sizes", path.display());
        }
        info!(tabs = state.len(), "loaded layouts from {}", path.display());
        Ok(state)
    }

    /// Write the forest to `path`, replacing it atomically.
    pub fn save_to_path(&self, path: &Path) -> Result<(), LayoutError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LayoutError::Persist(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| LayoutError::Persist(format!("failed to serialize layouts: {e}")))?;

        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)
            .map_err(|e| LayoutError::Persist(format!("failed to write {}: {e}", tmp.display())))?;
        std::fs::rename(&tmp, path).map_err(|e| {
            LayoutError::Persist(format!("failed to replace {}: {e}", path.display()))
        })?;
        Ok(())
    }
}
