use crate::kernel::services::ports::settings::Settings;
use crate::kernel::services::ports::WidgetRegistry;
use crate::models::WidgetType;
use std::path::{Path, PathBuf};

use super::paths::get_app_data_dir;

const SETTINGS_FILE: &str = "settings.json";

pub fn get_settings_path() -> Option<PathBuf> {
    get_app_data_dir().map(|dir| dir.join(SETTINGS_FILE))
}

pub fn ensure_settings_file() -> std::io::Result<PathBuf> {
    let path = get_settings_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine settings directory",
        )
    })?;
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content =
            serde_json::to_string_pretty(&Settings::default()).unwrap_or_else(|_| "{}".to_string());
        std::fs::write(&path, content)?;
    }
    Ok(path)
}

/// Reads settings from `path`; unreadable or invalid files fall back to defaults.
pub fn load_settings_from(path: &Path) -> Settings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "settings not readable, using defaults");
            return Settings::default();
        }
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings, using defaults");
            Settings::default()
        }
    }
}

pub fn load_settings() -> Option<Settings> {
    let path = get_settings_path()?;
    path.exists().then(|| load_settings_from(&path))
}

/// Built-in capability table plus the types hidden through settings.
pub fn registry_from_settings(settings: &Settings) -> WidgetRegistry {
    let mut registry = WidgetRegistry::builtin();
    for ty in &settings.explorer.hidden_widget_types {
        registry.hide(WidgetType::new(ty));
    }
    registry
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/settings.rs"]
mod tests;
