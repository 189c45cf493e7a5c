//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone, PartialEq)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub row_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub highlight_fg: Color,
    pub match_fg: Color,
    pub muted_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(6),    // Cyan
            inactive_border: Color::Indexed(8), // DarkGray
            accent_fg: Color::Indexed(3),
            header_fg: Color::Indexed(6),
            row_fg: Color::Indexed(15),
            selected_bg: Color::Indexed(8),
            selected_fg: Color::Indexed(15),
            highlight_fg: Color::Indexed(14),
            match_fg: Color::Indexed(3),
            muted_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// Overrides every color the settings name; unparsable values keep the default.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color); 10] = [
            (&settings.focus_border, &mut self.focus_border),
            (&settings.inactive_border, &mut self.inactive_border),
            (&settings.accent_fg, &mut self.accent_fg),
            (&settings.header_fg, &mut self.header_fg),
            (&settings.row_fg, &mut self.row_fg),
            (&settings.selected_bg, &mut self.selected_bg),
            (&settings.selected_fg, &mut self.selected_fg),
            (&settings.highlight_fg, &mut self.highlight_fg),
            (&settings.match_fg, &mut self.match_fg),
            (&settings.muted_fg, &mut self.muted_fg),
        ];

        for (value, slot) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "ignoring unknown theme color"),
            }
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "white" => Color::Indexed(15),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        _ => return None,
    };

    Some(c)
}
