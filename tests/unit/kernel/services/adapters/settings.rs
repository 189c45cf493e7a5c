use super::*;
use tempfile::tempdir;

#[test]
fn load_settings_from_reads_hidden_types() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "explorer": { "hidden_widget_types": ["CHART_WIDGET"] }, "app_slug": "crm" }"#,
    )
    .unwrap();

    let settings = load_settings_from(&path);
    assert_eq!(settings.app_slug, "crm");

    let registry = registry_from_settings(&settings);
    assert!(!registry.is_renderable_in_explorer(&WidgetType::new(WidgetType::CHART)));
    assert!(!registry.is_renderable_in_explorer(&WidgetType::new(WidgetType::ICON)));
    assert!(registry.is_renderable_in_explorer(&WidgetType::new(WidgetType::BUTTON)));
}

#[test]
fn load_settings_from_falls_back_on_invalid_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    let settings = load_settings_from(&path);
    assert!(settings.explorer.hidden_widget_types.is_empty());
    assert_eq!(settings.explorer.indent_width, 2);
}

#[test]
fn load_settings_from_missing_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let settings = load_settings_from(&dir.path().join("missing.json"));
    assert_eq!(settings.app_slug, "application");
}
