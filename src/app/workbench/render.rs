use super::{
    Workbench, EXPLORER_MIN_WIDTH, EXPLORER_WIDTH_PERCENT, HEADER_HEIGHT, STATUS_HEIGHT,
};
use crate::kernel::{Action as KernelAction, FocusTarget};
use crate::views::explorer::flatten_visible;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

impl Workbench {
    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        let explorer_width = ((rows[1].width as u32 * EXPLORER_WIDTH_PERCENT as u32 / 100) as u16)
            .max(EXPLORER_MIN_WIDTH)
            .min(rows[1].width);
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(explorer_width), Constraint::Min(0)])
            .split(rows[1]);

        self.render_header(frame, rows[0]);
        self.render_explorer(frame, body[0]);
        self.render_cards(frame, body[1]);
        self.render_status(frame, rows[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let title = Span::styled(
            " Widgets & Applications ",
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        );
        let location = Span::styled(
            state.ui.location.clone(),
            Style::default().fg(self.theme.muted_fg),
        );
        frame.render_widget(Paragraph::new(Line::from(vec![title, location])), area);
    }

    fn render_explorer(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus() == FocusTarget::Explorer;
        let title = match self.store.state().explorer.search_keyword() {
            Some(keyword) => format!(" Widgets /{keyword} "),
            None => " Widgets ".to_string(),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                self.theme.focus_border
            } else {
                self.theme.inactive_border
            }))
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.store.state().explorer.view_height != inner.height as usize {
            self.store.dispatch(KernelAction::ExplorerSetViewHeight {
                height: inner.height as usize,
            });
        }

        let tree = self.entity_tree();
        let rows = flatten_visible(&tree);
        let explorer = &self.store.state().explorer;
        let cursor = focused.then_some(explorer.cursor);
        self.explorer
            .render(frame, inner, &rows, cursor, explorer.scroll_offset, &self.theme);
    }

    fn render_cards(&mut self, frame: &mut Frame, area: Rect) {
        let element = self.card_list_element();
        let focused = self.focus() == FocusTarget::Applications;
        let cursor = self.store.state().applications.cursor;
        self.cards
            .render(frame, area, &element, cursor, focused, &self.theme);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let dialog = &state.ui.input_dialog;

        let line = if dialog.visible {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", dialog.title),
                    Style::default().fg(self.theme.accent_fg),
                ),
                Span::raw(dialog.value.clone()),
                Span::styled("█", Style::default().fg(self.theme.accent_fg)),
            ])
        } else {
            let selected = state.selection.selected_widgets().len();
            let hints = match state.ui.focus {
                FocusTarget::Explorer => "↑↓ move  ⏎ select  ←→ fold  / search  r rename  tab apps",
                FocusTarget::Applications => "↑↓ move  n new  r rename  d delete  tab widgets",
            };
            Line::from(vec![
                Span::styled(
                    format!(" {selected} selected "),
                    Style::default().fg(self.theme.selected_fg).bg(self.theme.selected_bg),
                ),
                Span::styled(format!("  {hints}"), Style::default().fg(self.theme.muted_fg)),
            ])
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}
