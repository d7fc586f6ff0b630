//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use crate::schema::SplittermConfig;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_splitterm_config.toml"));
    assert!(matches!(
        result,
        Err(splitterm_common::ConfigError::FileNotFound(_))
    ));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[terminal]
cell_height_px = 20.0
padding_px = 8.0

[session]
resize_quiet_ms = 100
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.terminal.cell_height_px, 20.0);
    assert_eq!(config.terminal.padding_px, 8.0);
    assert_eq!(config.session.resize_quiet_ms, 100);
    assert_eq!(config.terminal.cols, 80);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, splitterm_common::ConfigError::ParseError(_)));
}

#[test]
fn load_with_invalid_values_still_returns_parsed_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[terminal]\nscrollback_lines = 999999\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.terminal.scrollback_lines, 999_999);
}

#[test]
fn create_default_config_writes_parseable_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let content = std::fs::read_to_string(&path).unwrap();
    let config: SplittermConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.terminal.rows, 24);
}

#[test]
fn default_config_path_ends_with_splitterm() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("splitterm/config.toml"));
    }
}

#[test]
fn create_default_config_keeps_an_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[terminal]\ncols = 132\n").unwrap();

    create_default_config(&path).unwrap();
    let config = load_from_path(&path).unwrap();
    assert_eq!(config.terminal.cols, 132);
}
