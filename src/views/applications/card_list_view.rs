//! 应用卡片列表视图（纯渲染 + 命中测试）

use super::card_list::{ApplicationCard, CardListElement};
use crate::app::theme::UiTheme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Rows taken by one card: name, meta line, menu line.
const CARD_HEIGHT: u16 = 3;

/// Cuts `text` to `max_width` terminal cells, ending with `…` when shortened.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if max_width > 0 {
        out.push('…');
    }
    out
}

#[derive(Default)]
pub struct CardListView {
    cards_area: Option<Rect>,
}

impl CardListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.cards_area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    /// Index of the card under (column, row).
    pub fn hit_test_card(&self, column: u16, row: u16, card_count: usize) -> Option<usize> {
        if !self.contains(column, row) {
            return None;
        }
        let area = self.cards_area?;
        let index = ((row - area.y) / CARD_HEIGHT) as usize;
        (index < card_count).then_some(index)
    }

    fn header(element: &CardListElement, theme: &UiTheme) -> Line<'static> {
        let mut spans = vec![Span::styled(
            element.title.clone(),
            Style::default()
                .fg(theme.header_fg)
                .add_modifier(Modifier::BOLD),
        )];
        if let Some(tag) = &element.title_tag {
            spans.push(Span::styled(
                format!(" [{tag}]"),
                Style::default().fg(theme.muted_fg),
            ));
        }
        if element.is_loading {
            spans.push(Span::styled(
                "  loading…",
                Style::default().fg(theme.accent_fg),
            ));
        }
        Line::from(spans)
    }

    fn card_lines(
        card: &ApplicationCard,
        is_cursor: bool,
        width: u16,
        theme: &UiTheme,
    ) -> [Line<'static>; 3] {
        let mut name_style = Style::default().fg(theme.row_fg).add_modifier(Modifier::BOLD);
        if is_cursor {
            name_style = name_style.bg(theme.selected_bg).fg(theme.selected_fg);
        }
        let muted = Style::default().fg(theme.muted_fg);

        let app = &card.application;
        let icon = app.icon.as_deref().unwrap_or("■");
        let meta = match (&app.modified_by, &app.modified_at) {
            (Some(by), Some(at)) => format!("  edited by {by} · {at}"),
            (Some(by), None) => format!("  edited by {by}"),
            (None, Some(at)) => format!("  edited {at}"),
            (None, None) => String::new(),
        };
        let menu = card
            .menu
            .iter()
            .map(|item| item.label())
            .collect::<Vec<_>>()
            .join(" · ");

        [
            Line::from(Span::styled(
                truncate_to_width(&format!("{icon} {}", app.name), width as usize),
                name_style,
            )),
            Line::from(Span::styled(meta, muted)),
            Line::from(Span::styled(format!("  {menu}"), Style::default().fg(theme.accent_fg))),
        ]
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        element: &CardListElement,
        cursor: usize,
        is_focused: bool,
        theme: &UiTheme,
    ) {
        let border = if is_focused {
            theme.focus_border
        } else {
            theme.inactive_border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Self::header(element, theme));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        self.cards_area = Some(inner);

        if let Some(empty) = &element.empty_state {
            let lines = vec![
                Line::from(Span::styled(
                    empty.message.clone(),
                    Style::default().fg(theme.row_fg),
                )),
                Line::from(Span::styled(
                    empty.image_url.clone(),
                    Style::default().fg(theme.muted_fg),
                )),
            ];
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
            return;
        }

        let visible = (inner.height / CARD_HEIGHT) as usize;
        let lines: Vec<Line> = element
            .cards
            .iter()
            .enumerate()
            .take(visible)
            .flat_map(|(i, card)| Self::card_lines(card, i == cursor, inner.width, theme))
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
