//! Terminal grid, scrollback, and cell metric validation.

use crate::schema::SplittermConfig;

use super::helpers::{validate_non_negative_f64, validate_positive_f64, validate_range};

pub(crate) fn validate_terminal(errors: &mut Vec<String>, config: &SplittermConfig) {
    let t = &config.terminal;
    validate_range(errors, "terminal.cols", t.cols.into(), 1, 1000);
    validate_range(errors, "terminal.rows", t.rows.into(), 1, 1000);
    validate_range(
        errors,
        "terminal.scrollback_lines",
        t.scrollback_lines.into(),
        0,
        100_000,
    );
    validate_positive_f64(errors, "terminal.cell_width_px", t.cell_width_px);
    validate_positive_f64(errors, "terminal.cell_height_px", t.cell_height_px);
    validate_non_negative_f64(errors, "terminal.padding_px", t.padding_px);
    if t.footer_rows >= t.rows {
        errors.push(format!(
            "terminal.footer_rows = {} must be less than terminal.rows = {}",
            t.footer_rows, t.rows
        ));
    }
}
