use super::*;
use crate::kernel::services::ports::EntityIcon;
use crate::models::WidgetType;
use crate::views::explorer::widget_entity::WidgetContextMenu;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::rc::Rc;

fn row(id: &str, name: &str, step: u16) -> EntityRow {
    EntityRow {
        entity_id: id.to_string(),
        name: name.to_string(),
        widget_type: WidgetType::new(WidgetType::BUTTON),
        step,
        page_id: "p1".to_string(),
        icon: EntityIcon::Registered("⏺"),
        active: false,
        highlight: false,
        context_menu: None,
        can_edit_entity_name: true,
        show_add_button: true,
        is_default_expanded: false,
        force_expand: false,
        expanded: false,
        has_children: false,
        search_keyword: None,
        name_match: None,
        parent_modal_id: None,
        widgets_in_step: Rc::from(Vec::new()),
        to_url: String::new(),
    }
}

fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|s| s.content.as_ref()).collect()
}

#[test]
fn render_row_indents_by_step_and_marks_expansion() {
    let view = ExplorerView::new(2);
    let theme = UiTheme::default();

    let mut parent = row("frm1", "Form1", 0);
    parent.has_children = true;
    parent.expanded = true;
    let child = row("btn1", "Submit", 2);

    assert_eq!(line_text(&view.render_row(&parent, false, &theme)), "▼ ⏺ Form1");
    assert_eq!(line_text(&view.render_row(&child, false, &theme)), "      ⏺ Submit");

    parent.expanded = false;
    assert_eq!(line_text(&view.render_row(&parent, false, &theme)), "▶ ⏺ Form1");
}

#[test]
fn render_row_splits_the_keyword_match() {
    let view = ExplorerView::new(2);
    let theme = UiTheme::default();
    let mut r = row("btn1", "SubmitButton", 0);
    r.name_match = Some(6..12);

    let line = view.render_row(&r, false, &theme);
    let contents: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();

    assert_eq!(contents[2..], ["Submit", "Button", ""]);
    assert_eq!(line.spans[3].style.fg, Some(theme.match_fg));
}

#[test]
fn render_row_shows_context_marker_and_active_style() {
    let view = ExplorerView::new(2);
    let theme = UiTheme::default();
    let mut r = row("btn1", "Submit", 0);
    r.active = true;
    r.context_menu = Some(WidgetContextMenu {
        widget_id: "btn1".to_string(),
        page_id: "p1".to_string(),
        can_manage_pages: true,
    });

    let line = view.render_row(&r, false, &theme);
    assert!(line_text(&line).ends_with(" ⋯"));
    assert_eq!(line.spans[0].style.bg, Some(theme.selected_bg));
}

#[test]
fn render_paints_visible_window_and_hit_tests_with_scroll() {
    let rows = [row("a", "Alpha", 0), row("b", "Beta", 0), row("c", "Gamma", 0)];
    let refs: Vec<&EntityRow> = rows.iter().collect();
    let theme = UiTheme::default();
    let mut view = ExplorerView::new(2);

    let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area, &refs, Some(1), 1, &theme);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    let first: String = (0..20).map(|x| buffer[(x, 0)].symbol()).collect();
    let second: String = (0..20).map(|x| buffer[(x, 1)].symbol()).collect();
    assert!(first.contains("Beta"));
    assert!(second.contains("Gamma"));

    assert!(view.contains(3, 1));
    assert!(!view.contains(3, 2));
    assert_eq!(view.view_height(), Some(2));
    assert_eq!(view.hit_test_row(3, 1, 1), Some(2));
    assert_eq!(view.hit_test_row(25, 1, 1), None);
}

#[test]
fn hit_test_marker_only_on_parent_rows() {
    let rows = [row("a", "Alpha", 0)];
    let refs: Vec<&EntityRow> = rows.iter().collect();
    let mut view = ExplorerView::new(2);
    let mut terminal = Terminal::new(TestBackend::new(20, 3)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area, &refs, None, 0, &UiTheme::default());
        })
        .unwrap();

    let mut parent = row("frm1", "Form1", 1);
    parent.has_children = true;
    assert!(!view.hit_test_marker(1, &parent));
    assert!(view.hit_test_marker(2, &parent));
    assert!(view.hit_test_marker(3, &parent));
    assert!(!view.hit_test_marker(4, &parent));

    assert!(!view.hit_test_marker(2, &row("b", "Leaf", 1)));
}

#[test]
fn wide_indent_does_not_overflow() {
    let mut view = ExplorerView::new(5000);
    let mut deep = row("w", "deep", 14);
    deep.has_children = true;

    let mut terminal = Terminal::new(TestBackend::new(20, 2)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            view.render(frame, area, &[&deep], Some(0), 0, &UiTheme::default());
        })
        .unwrap();

    let line = view.render_row(&deep, false, &UiTheme::default());
    assert!(line_text(&line).ends_with("▶ ⏺ deep"));
    assert_eq!(line.spans[0].content.len(), 70_000 + "▶ ".len());
    assert!(!view.hit_test_marker(3, &deep));
}
