//! Terminal pane configuration: grid defaults, cell metrics, padding.

use serde::{Deserialize, Serialize};
use splitterm_common::{CellMetrics, GridSize};

/// Terminal pane settings.
///
/// `cell_width_px`/`cell_height_px` are the rendered size of one character
/// cell in the host's font; pixel resizes divide by them after removing
/// `padding_px` from each side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Initial columns before the first pixel resize (valid range: 1-1000).
    pub cols: u16,
    /// Initial rows before the first pixel resize (valid range: 1-1000).
    pub rows: u16,
    /// Scrollback capacity in lines (valid range: 0-100_000).
    pub scrollback_lines: u32,
    pub cell_width_px: f64,
    pub cell_height_px: f64,
    /// Padding inside each pane, applied on every side.
    pub padding_px: f64,
    /// Rows reserved below the grid after pixel conversion.
    pub footer_rows: u16,
}

impl TerminalConfig {
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.cols, self.rows)
    }

    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics {
            width: self.cell_width_px,
            height: self.cell_height_px,
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cols: 80,
            rows: 24,
            scrollback_lines: 10_000,
            cell_width_px: 9.0,
            cell_height_px: 17.0,
            padding_px: 16.0,
            footer_rows: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_config_defaults() {
        let config = TerminalConfig::default();
        assert_eq!(config.grid(), GridSize::new(80, 24));
        assert_eq!(
            config.cell_metrics(),
            CellMetrics {
                width: 9.0,
                height: 17.0
            }
        );
        assert_eq!(config.scrollback_lines, 10_000);
        assert_eq!(config.footer_rows, 0);
    }

    #[test]
    fn terminal_config_partial_toml() {
        let toml_str = r#"
scrollback_lines = 500
cell_width_px = 7.5
"#;
        let config: TerminalConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.scrollback_lines, 500);
        assert_eq!(config.cell_width_px, 7.5);
        assert_eq!(config.cell_height_px, 17.0);
        assert_eq!(config.padding_px, 16.0);
    }
}
