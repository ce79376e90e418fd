//! Tests for TOML config loading and path resolution.

use super::*;
use std::path::Path;

use texcube_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = load_from_path(&path).unwrap_err();
    match err {
        ConfigError::FileNotFound(p) => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Spinning crate"
vsync = false

[assets]
primary_texture = "/srv/textures/wood.jpg"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Spinning crate");
    assert!(!config.window.vsync);
    assert_eq!(
        config.assets.primary_texture,
        Path::new("/srv/textures/wood.jpg")
    );
    // Defaults preserved
    assert_eq!(config.window.width, 1133);
    assert_eq!(
        config.assets.secondary_texture,
        Path::new("assets/textures/emblem.png")
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let err = load_from_path(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn wrong_field_type_is_parse_error() {
    let err = parse_str("[window]\nwidth = \"wide\"\n").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_does_not_validate() {
    let config = parse_str("[window]\nheight = 0\n").unwrap();
    assert_eq!(config.window.height, 0);
}

#[test]
fn default_config_path_ends_with_texcube_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("texcube/config.toml"));
    }
}
