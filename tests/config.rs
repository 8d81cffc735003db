//! Configuration system tests
//!
//! Tests for config paths, layout config, and session persistence.

mod common;

use common::*;
use dockyard::config_paths;
use dockyard::layout::{compute_layout, Rect};
use dockyard::session::SessionLayout;
use dockyard::{Axis, LayoutConfig, Workspace};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("dockyard"));
    }
}

#[test]
fn test_layout_file_ends_with_yaml() {
    if let Some(path) = config_paths::layout_file() {
        assert!(path.to_string_lossy().ends_with("layout.yaml"));
    }
}

#[test]
fn test_session_and_logs_are_under_config_dir() {
    if let (Some(config), Some(session), Some(logs)) = (
        config_paths::config_dir(),
        config_paths::session_file(),
        config_paths::logs_dir(),
    ) {
        assert!(session.starts_with(&config));
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Layout Config Tests
// ========================================================================

#[test]
fn test_default_config_has_panels() {
    let config = LayoutConfig::default();
    assert!(config.panel("explorer").is_some());
    assert_eq!(config.panel("console").unwrap().axis, Axis::Vertical);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = LayoutConfig::load_from(&dir.path().join("nope.yaml"));
    assert_eq!(config, LayoutConfig::default());
}

#[test]
fn test_invalid_yaml_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.yaml");
    std::fs::write(&path, "panels: [this is: not, valid").unwrap();
    assert_eq!(LayoutConfig::load_from(&path), LayoutConfig::default());
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("layout.yaml");

    let config = LayoutConfig {
        panels: vec![sidebar_options(), console_options().with_show_minimize(false)],
    };
    config.save_to(&path).unwrap();

    let loaded = LayoutConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_config_builds_workspace_in_order() {
    let config = LayoutConfig::default();
    let ws = Workspace::with_panels(1280, 800, &config.panels);
    let keys: Vec<&str> = ws.panels().iter().map(|p| p.key()).collect();
    assert_eq!(keys, vec!["explorer", "console"]);
}

// ========================================================================
// Session Tests
// ========================================================================

#[test]
fn test_session_persists_dragged_size() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let (mut ws, id) = test_workspace();
    drag_handle(&mut ws, id, &[100.0]);
    SessionLayout::capture(&ws).save_to(&path).unwrap();

    let (mut restored, restored_id) = test_workspace();
    let session = SessionLayout::load_from(&path);
    assert_eq!(session.version, SessionLayout::CURRENT_VERSION);
    assert_eq!(session.apply(&mut restored), 1);
    assert_eq!(restored.panel(restored_id).unwrap().dimension(), 356.0);
}

#[test]
fn test_corrupt_session_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let session = SessionLayout::load_from(&path);
    assert!(session.panels.is_empty());
}

#[test]
fn test_hostile_bounds_in_config_stay_sane() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.yaml");
    std::fs::write(
        &path,
        r#"
panels:
  - key: nan_min
    axis: horizontal
    default_dimension: .nan
    min_dimension: .nan
    max_dimension: 600
  - key: negative
    axis: vertical
    default_dimension: -50
    min_dimension: -100
    max_dimension: .inf
"#,
    )
    .unwrap();

    let config = LayoutConfig::load_from(&path);
    assert!(config.panel("nan_min").unwrap().min_dimension.is_nan());

    let mut ws = Workspace::with_panels(1280, 800, &config.panels);
    let nan_min = ws.panel_by_key("nan_min").unwrap().id();
    let negative = ws.panel_by_key("negative").unwrap().id();

    for id in [nan_min, negative] {
        let panel = ws.panel_mut(id).unwrap();
        assert_eq!(panel.dimension(), 0.0);
        assert_eq!(panel.set_dimension(-1000.0), 0.0);
        let bounds = panel.bounds();
        assert!(bounds.min.is_finite() && bounds.max.is_finite());
        assert!(bounds.min >= 0.0 && bounds.min <= bounds.max);
    }
    assert_eq!(ws.panel(nan_min).unwrap().bounds().max, 600.0);
    assert_eq!(compute_layout(&ws).fill, Rect::new(0.0, 0.0, 1280.0, 800.0));

    ws.panel_mut(nan_min).unwrap().set_dimension(1000.0);
    assert_eq!(compute_layout(&ws).fill, Rect::new(600.0, 0.0, 680.0, 800.0));
}
