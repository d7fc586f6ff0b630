//! Resize requests and pixel-to-grid conversion.

use splitterm_common::{CellMetrics, GridSize, PixelBounds};

/// A resize is either an exact grid or the pixel bounds of the pane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeRequest {
    Grid(GridSize),
    Pixels(PixelBounds),
}

/// Convert pane pixel bounds to a grid.
///
/// `padding` is removed from each side before dividing by the cell size;
/// `footer_rows` are subtracted after the division. Both axes are clamped
/// to at least one cell.
pub fn grid_from_pixels(
    bounds: PixelBounds,
    metrics: CellMetrics,
    padding: f64,
    footer_rows: u16,
) -> GridSize {
    let cols = cells(bounds.width - 2.0 * padding, metrics.width);
    let rows = cells(bounds.height - 2.0 * padding, metrics.height);
    GridSize::new(cols, rows.saturating_sub(footer_rows))
}

fn cells(extent: f64, cell: f64) -> u16 {
    if cell.is_nan() || cell <= 0.0 || !extent.is_finite() {
        return 1;
    }
    let n = (extent / cell).round();
    if n < 1.0 {
        1
    } else if n > f64::from(u16::MAX) {
        u16::MAX
    } else {
        n as u16
    }
}
