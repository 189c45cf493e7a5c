//! Per-user directories for settings and logs.

use std::path::PathBuf;

const APP_DIR: &str = ".lowcode-explorer";
const LOG_DIR: &str = "logs";

pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("LOWCODE_EXPLORER_HOME") {
        if !dir.trim().is_empty() {
            return Some(PathBuf::from(dir));
        }
    }
    home_dir().map(|home| home.join(APP_DIR))
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_data_dir().map(|p| p.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(dir)
}

fn home_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        return std::env::var("USERPROFILE").ok().map(PathBuf::from);
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
}
