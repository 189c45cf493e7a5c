//! 实体浏览器视图（纯渲染 + 命中测试）

use super::widget_entity::EntityRow;
use crate::app::theme::UiTheme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub struct ExplorerView {
    area: Option<Rect>,
    indent_width: u16,
}

impl ExplorerView {
    pub fn new(indent_width: u16) -> Self {
        Self {
            area: None,
            indent_width,
        }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.area
            .map(|a| x >= a.x && x < a.x + a.width && y >= a.y && y < a.y + a.height)
            .unwrap_or(false)
    }

    pub fn view_height(&self) -> Option<usize> {
        let area = self.area?;
        Some(area.height as usize)
    }

    pub fn hit_test_row(&self, column: u16, row: u16, scroll_offset: usize) -> Option<usize> {
        let area = self.area?;
        if column < area.x || column >= area.x + area.width {
            return None;
        }
        if row < area.y || row >= area.y + area.height {
            return None;
        }

        Some((row - area.y) as usize + scroll_offset)
    }

    /// Whether `column` falls on the expand marker of `row`.
    pub fn hit_test_marker(&self, column: u16, row: &EntityRow) -> bool {
        let Some(area) = self.area else {
            return false;
        };
        if !row.has_children || column < area.x {
            return false;
        }
        let marker_start = self.indent_cells(row);
        let offset = (column - area.x) as usize;
        offset >= marker_start && offset < marker_start + 2
    }

    fn indent_cells(&self, row: &EntityRow) -> usize {
        row.step as usize * self.indent_width as usize
    }

    pub(crate) fn render_row(
        &self,
        row: &EntityRow,
        is_cursor: bool,
        theme: &UiTheme,
    ) -> Line<'static> {
        let indent = " ".repeat(self.indent_cells(row));
        let marker = if row.has_children {
            if row.expanded {
                "▼ "
            } else {
                "▶ "
            }
        } else {
            "  "
        };

        let mut base = Style::default().fg(theme.row_fg);
        if row.active {
            base = base.bg(theme.selected_bg).fg(theme.selected_fg);
        }
        if row.highlight {
            base = base.fg(theme.highlight_fg).add_modifier(Modifier::BOLD);
        }
        if is_cursor {
            base = base.add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![
            Span::styled(format!("{indent}{marker}"), base),
            Span::styled(format!("{} ", row.icon.glyph()), base.fg(theme.accent_fg)),
        ];

        match &row.name_match {
            Some(range) => {
                let name = row.name.as_str();
                spans.push(Span::styled(name[..range.start].to_string(), base));
                spans.push(Span::styled(
                    name[range.clone()].to_string(),
                    base.fg(theme.match_fg).add_modifier(Modifier::UNDERLINED),
                ));
                spans.push(Span::styled(name[range.end..].to_string(), base));
            }
            None => spans.push(Span::styled(row.name.clone(), base)),
        }

        if row.context_menu.is_some() {
            spans.push(Span::styled(" ⋯", base.fg(theme.muted_fg)));
        }

        Line::from(spans)
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[&EntityRow],
        cursor: Option<usize>,
        scroll_offset: usize,
        theme: &UiTheme,
    ) {
        self.area = Some(area);

        let visible_height = area.height as usize;
        let start = scroll_offset.min(rows.len());
        let visible_end = (scroll_offset + visible_height).min(rows.len());

        let lines: Vec<Line> = rows[start..visible_end]
            .iter()
            .enumerate()
            .map(|(i, row)| self.render_row(row, cursor == Some(start + i), theme))
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/explorer_view.rs"]
mod tests;
