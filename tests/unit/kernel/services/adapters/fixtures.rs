use super::*;
use crate::models::WidgetType;
use tempfile::tempdir;

#[test]
fn bundled_demo_fixtures_parse() {
    let canvas = demo_canvas().unwrap();
    assert_eq!(canvas.widget_type.as_str(), WidgetType::CANVAS);
    assert!(canvas
        .iter_preorder()
        .any(|n| n.widget_type.as_str() == WidgetType::MODAL));

    let workspace = demo_workspace().unwrap();
    assert!(!workspace.applications.is_empty());
    assert!(!workspace.page_id.is_empty());
}

#[test]
fn load_canvas_reports_parse_errors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("canvas.json");
    std::fs::write(&path, r#"{ "widgetId": "0" }"#).unwrap();

    let err = load_canvas(&path).unwrap_err();
    assert!(matches!(err, FixtureError::Parse(_)));
    assert!(err.to_string().starts_with("invalid fixture json"));
}

#[test]
fn load_workspace_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_workspace(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, FixtureError::Io(_)));
}

#[test]
fn load_workspace_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("workspace.json");
    std::fs::write(&path, r#"{ "workspaceId": "ws1", "title": "Sales" }"#).unwrap();

    let workspace = load_workspace(&path).unwrap();
    assert_eq!(workspace.workspace_id, "ws1");
    assert!(workspace.applications.is_empty());
    assert!(!workspace.permissions.has_manage_workspace_permissions);
}

#[test]
fn workspace_fixture_seeds_app_state() {
    let workspace = demo_workspace().unwrap();
    let app_count = workspace.applications.len();
    let page_id = workspace.page_id.clone();

    let state = workspace.into_app_state(demo_canvas().unwrap());
    assert_eq!(state.explorer.page_id, page_id);
    assert_eq!(state.applications.records.len(), app_count);
    assert!(state
        .explorer
        .page_permissions
        .iter()
        .any(|p| p == "manage:pages"));
    assert!(state.selection.selected_widgets().is_empty());
}
