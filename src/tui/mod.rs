//! TUI integration layer (crossterm + ratatui).
//!
//! Kept apart from `kernel`/`models` so the core has no terminal dependency.

pub mod crossterm;
pub mod terminal_guard;
