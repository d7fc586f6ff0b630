//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    assert!(validate(&SplittermConfig::default()).is_ok());
}

#[test]
fn catches_zero_cols() {
    let mut config = SplittermConfig::default();
    config.terminal.cols = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("terminal.cols"));
}

#[test]
fn catches_scrollback_too_large() {
    let mut config = SplittermConfig::default();
    config.terminal.scrollback_lines = 200_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("terminal.scrollback_lines"));
}

#[test]
fn catches_non_positive_cell_metrics() {
    let mut config = SplittermConfig::default();
    config.terminal.cell_width_px = 0.0;
    config.terminal.cell_height_px = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("terminal.cell_width_px"));
    assert!(err.contains("terminal.cell_height_px"));
}

#[test]
fn catches_negative_padding() {
    let mut config = SplittermConfig::default();
    config.terminal.padding_px = -1.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("terminal.padding_px"));
}

#[test]
fn catches_footer_rows_swallowing_grid() {
    let mut config = SplittermConfig::default();
    config.terminal.footer_rows = 24;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("terminal.footer_rows"));
}

#[test]
fn catches_quiet_interval_too_long() {
    let mut config = SplittermConfig::default();
    config.session.resize_quiet_ms = 60_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.resize_quiet_ms"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = SplittermConfig::default();
    config.terminal.rows = 0;
    config.session.resize_quiet_ms = 10_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("terminal.rows"));
    assert!(err.contains("session.resize_quiet_ms"));
    assert!(err.contains("; "));
}
