use super::{EventResult, Workbench};
use crate::kernel::{Action as KernelAction, ClickModifiers, FocusTarget, InputDialogKind};
use crate::tui::crossterm::{click_modifiers, is_press, is_quit};
use crate::views::applications::CardMenuItem;
use crate::views::explorer::flatten_visible;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

const SCROLL_STEP: isize = 3;

impl Workbench {
    pub fn handle_event(&mut self, event: &Event) -> EventResult {
        match event {
            Event::Key(key) if is_press(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if is_quit(key) {
            return EventResult::Quit;
        }
        if self.store.state().ui.input_dialog.visible {
            return self.handle_dialog_key(key);
        }
        if key.code == KeyCode::Tab {
            let next = match self.focus() {
                FocusTarget::Explorer => FocusTarget::Applications,
                FocusTarget::Applications => FocusTarget::Explorer,
            };
            self.dispatch_kernel(KernelAction::SetFocus(next));
            return EventResult::Consumed;
        }

        match self.focus() {
            FocusTarget::Explorer => self.handle_explorer_key(key),
            FocusTarget::Applications => self.handle_applications_key(key),
        }
    }

    fn handle_dialog_key(&mut self, key: &KeyEvent) -> EventResult {
        let action = match key.code {
            KeyCode::Enter => KernelAction::InputDialogConfirm,
            KeyCode::Esc => KernelAction::InputDialogCancel,
            KeyCode::Backspace => KernelAction::InputDialogBackspace,
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                KernelAction::InputDialogAppend(ch)
            }
            _ => return EventResult::Ignored,
        };
        self.dispatch_kernel(action);
        EventResult::Consumed
    }

    fn handle_explorer_key(&mut self, key: &KeyEvent) -> EventResult {
        let page = self.store.state().explorer.view_height.max(1) as isize;
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => KernelAction::ExplorerMoveCursor { delta: -1 },
            KeyCode::Down | KeyCode::Char('j') => KernelAction::ExplorerMoveCursor { delta: 1 },
            KeyCode::PageUp => KernelAction::ExplorerMoveCursor { delta: -page },
            KeyCode::PageDown => KernelAction::ExplorerMoveCursor { delta: page },
            KeyCode::Char('/') => KernelAction::InputDialogOpen(InputDialogKind::ExplorerSearch),
            KeyCode::Esc if self.store.state().explorer.search_keyword().is_some() => {
                KernelAction::ExplorerSetSearchKeyword(String::new())
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                return self.activate_cursor_row(click_modifiers(key.modifiers));
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
                let expand = matches!(key.code, KeyCode::Right | KeyCode::Char('l'));
                match self.toggle_cursor_row(expand) {
                    Some(action) => action,
                    None => return EventResult::Ignored,
                }
            }
            KeyCode::F(2) | KeyCode::Char('r') => match self.rename_cursor_row() {
                Some(action) => action,
                None => return EventResult::Ignored,
            },
            _ => return EventResult::Ignored,
        };
        self.dispatch_kernel(action);
        EventResult::Consumed
    }

    fn activate_cursor_row(&mut self, modifiers: ClickModifiers) -> EventResult {
        let cursor = self.store.state().explorer.cursor;
        let tree = self.entity_tree();
        let Some(action) = flatten_visible(&tree).get(cursor).map(|row| row.activate(modifiers))
        else {
            return EventResult::Ignored;
        };
        self.dispatch_kernel(action);
        EventResult::Consumed
    }

    /// Toggle only when it moves the row towards `expand`.
    fn toggle_cursor_row(&self, expand: bool) -> Option<KernelAction> {
        let cursor = self.store.state().explorer.cursor;
        let tree = self.entity_tree();
        let rows = flatten_visible(&tree);
        let row = rows.get(cursor)?;
        if row.expanded == expand {
            return None;
        }
        row.toggle()
    }

    fn rename_cursor_row(&self) -> Option<KernelAction> {
        let cursor = self.store.state().explorer.cursor;
        let tree = self.entity_tree();
        let rows = flatten_visible(&tree);
        let row = rows.get(cursor)?;
        row.can_edit_entity_name
            .then(|| KernelAction::InputDialogOpen(InputDialogKind::RenameWidget {
                widget_id: row.entity_id.clone(),
            }))
    }

    fn handle_applications_key(&mut self, key: &KeyEvent) -> EventResult {
        let element = self.card_list_element();
        let cursor = self.store.state().applications.cursor;
        let card = element.cards.get(cursor);

        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(KernelAction::ApplicationsMoveCursor { delta: -1 }),
            KeyCode::Down | KeyCode::Char('j') => Some(KernelAction::ApplicationsMoveCursor { delta: 1 }),
            KeyCode::Char('n') => element.add(),
            KeyCode::Char('d') | KeyCode::Delete => card.and_then(|c| c.delete()),
            KeyCode::Char('r') | KeyCode::F(2) => card
                .filter(|c| c.menu.contains(&CardMenuItem::Edit))
                .map(|c| KernelAction::InputDialogOpen(InputDialogKind::RenameApplication {
                    id: c.key.clone(),
                })),
            _ => None,
        };

        match action {
            Some(action) => {
                self.dispatch_kernel(action);
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        let in_explorer = self.explorer.contains(mouse.column, mouse.row);
        let in_cards = self.cards.contains(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::ScrollUp if in_explorer => {
                self.dispatch_kernel(KernelAction::ExplorerScroll { delta: -SCROLL_STEP });
                EventResult::Consumed
            }
            MouseEventKind::ScrollDown if in_explorer => {
                self.dispatch_kernel(KernelAction::ExplorerScroll { delta: SCROLL_STEP });
                EventResult::Consumed
            }
            MouseEventKind::Down(MouseButton::Left) if in_explorer => {
                self.click_explorer(mouse)
            }
            MouseEventKind::Down(MouseButton::Left) if in_cards => {
                self.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Applications));
                let count = self.store.state().applications.records.len();
                if let Some(index) = self.cards.hit_test_card(mouse.column, mouse.row, count) {
                    let cursor = self.store.state().applications.cursor;
                    let delta = index as isize - cursor as isize;
                    self.dispatch_kernel(KernelAction::ApplicationsMoveCursor { delta });
                }
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn click_explorer(&mut self, mouse: &MouseEvent) -> EventResult {
        self.dispatch_kernel(KernelAction::SetFocus(FocusTarget::Explorer));

        let scroll = self.store.state().explorer.scroll_offset;
        let Some(index) = self.explorer.hit_test_row(mouse.column, mouse.row, scroll) else {
            return EventResult::Consumed;
        };
        let tree = self.entity_tree();
        let rows = flatten_visible(&tree);
        let Some(row) = rows.get(index) else {
            return EventResult::Consumed;
        };

        let action = if self.explorer.hit_test_marker(mouse.column, row) {
            row.toggle()
        } else {
            Some(row.activate(click_modifiers(mouse.modifiers)))
        };

        self.dispatch_kernel(KernelAction::ExplorerSetCursor { row: index });
        if let Some(action) = action {
            self.dispatch_kernel(action);
        }
        EventResult::Consumed
    }
}
