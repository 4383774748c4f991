//! Integration tests for Settings loading from explicit config files.
//!
//! These never touch the environment; the env layer is covered in
//! `config_env_test.rs`, which runs as its own process.

use std::fs;

use tempfile::TempDir;

use dpatterns::config::{LabelMode, RenderStyle, Settings};

#[test]
fn given_explicit_file_when_load_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    fs::write(
        &path,
        r#"
tree = "root(A, B)"

[render]
style = "tree"
"#,
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(&path)).expect("load settings");

    // Assert
    assert_eq!(settings.tree.as_deref(), Some("root(A, B)"));
    assert_eq!(settings.render.style, RenderStyle::Tree);
    assert_eq!(settings.render.label, LabelMode::Name, "unset keys keep defaults");
}

#[test]
fn given_missing_explicit_file_when_load_then_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(Settings::load(Some(&path)).is_err());
}

#[test]
fn given_invalid_style_when_load_then_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[render]\nstyle = \"sideways\"\n").unwrap();

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().starts_with("config error"), "{err}");
}

#[test]
fn given_effective_settings_when_shown_then_toml_reloads_equal() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shown.toml");
    fs::write(&path, "[render]\nlabel = \"render\"\n").unwrap();
    let settings = Settings::load(Some(&path)).unwrap();

    // Act
    let shown = settings.to_toml().unwrap();
    let reread = dir.path().join("reread.toml");
    fs::write(&reread, shown).unwrap();

    // Assert
    assert_eq!(Settings::load(Some(&reread)).unwrap(), settings);
}
