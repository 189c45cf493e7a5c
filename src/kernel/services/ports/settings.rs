use serde::{Deserialize, Serialize};

pub const DEFAULT_ASSETS_CDN_URL: &str = "https://assets.appsmith.com";
pub const LOCAL_ASSETS_PREFIX: &str = "/assets";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub explorer: ExplorerSettings,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub feature_flags: Vec<String>,
    #[serde(default = "default_app_slug")]
    pub app_slug: String,
}

fn default_app_slug() -> String {
    "application".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplorerSettings {
    /// Extra widget types kept out of the explorer, on top of the built-in table.
    #[serde(default)]
    pub hidden_widget_types: Vec<String>,
    #[serde(default = "default_indent_width")]
    pub indent_width: u16,
}

fn default_indent_width() -> u16 {
    2
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            hidden_widget_types: Vec::new(),
            indent_width: default_indent_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    #[serde(default = "default_cdn_url")]
    pub cdn_url: String,
    /// Air-gapped installs serve assets locally instead of from the CDN.
    #[serde(default)]
    pub airgapped: bool,
}

fn default_cdn_url() -> String {
    DEFAULT_ASSETS_CDN_URL.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            cdn_url: default_cdn_url(),
            airgapped: false,
        }
    }
}

impl AssetConfig {
    pub fn asset_url(&self, file: &str) -> String {
        let file = file.trim_start_matches('/');
        if self.airgapped {
            format!("{LOCAL_ASSETS_PREFIX}/{file}")
        } else {
            format!("{}/{file}", self.cdn_url.trim_end_matches('/'))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("cyan".to_string()),
            row_fg: Some("white".to_string()),
            selected_bg: Some("dark_gray".to_string()),
            selected_fg: Some("white".to_string()),
            highlight_fg: Some("light_cyan".to_string()),
            match_fg: Some("yellow".to_string()),
            muted_fg: Some("dark_gray".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: ThemeSettings::default(),
            explorer: ExplorerSettings::default(),
            assets: AssetConfig::default(),
            feature_flags: Vec::new(),
            app_slug: default_app_slug(),
        }
    }
}
