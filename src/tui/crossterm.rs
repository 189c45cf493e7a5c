//! crossterm input mapped onto kernel types.

use crate::kernel::ClickModifiers;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Modifier keys held during a click or key press.
///
/// Terminals report the command key as `SUPER` when they report it at all;
/// `ALT` is treated as meta since most terminals send it instead.
pub fn click_modifiers(mods: KeyModifiers) -> ClickModifiers {
    ClickModifiers {
        meta: mods.intersects(KeyModifiers::SUPER | KeyModifiers::META | KeyModifiers::ALT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        shift: mods.contains(KeyModifiers::SHIFT),
    }
}

pub fn is_press(event: &KeyEvent) -> bool {
    event.kind != KeyEventKind::Release
}

pub fn is_quit(event: &KeyEvent) -> bool {
    matches!(
        (event.code, event.modifiers),
        (KeyCode::Char('q'), KeyModifiers::CONTROL) | (KeyCode::Char('c'), KeyModifiers::CONTROL)
    )
}
