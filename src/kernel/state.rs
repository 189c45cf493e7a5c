use crate::kernel::services::ports::{FeatureFlag, FeatureFlags};
use crate::models::{ApplicationRecord, WidgetNode, WidgetType, WorkspacePermissions};
use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Explorer,
    Applications,
}

/// How a widget selection request combines with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionRequestType {
    /// Replace the selection with the target.
    One,
    /// Toggle the target in or out of the selection.
    PushPop,
    /// Select the sibling range between the last selected widget and the target.
    ShiftSelect,
}

/// Selected widgets on the canvas, shared by every explorer row.
///
/// Only reducers mutate it. `generation` moves on every change and keys the
/// memoized per-row flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_widgets: Vec<String>,
    last_selected_widget: Option<String>,
    widgets_to_expand: Vec<String>,
    generation: u64,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(selected: &[&str], last_selected: Option<&str>) -> Self {
        Self {
            selected_widgets: selected.iter().map(|s| s.to_string()).collect(),
            last_selected_widget: last_selected.map(str::to_string),
            widgets_to_expand: Vec::new(),
            generation: 1,
        }
    }

    pub fn selected_widgets(&self) -> &[String] {
        &self.selected_widgets
    }

    pub fn last_selected_widget(&self) -> Option<&str> {
        self.last_selected_widget.as_deref()
    }

    pub fn widgets_to_expand(&self) -> &[String] {
        &self.widgets_to_expand
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_selected(&self, widget_id: &str) -> bool {
        self.selected_widgets.iter().any(|id| id == widget_id)
    }

    pub fn multiple_selected(&self) -> bool {
        self.selected_widgets.len() > 1
    }

    pub fn should_force_expand(&self, widget_id: &str) -> bool {
        self.widgets_to_expand.iter().any(|id| id == widget_id)
    }

    pub fn set_selection(&mut self, selected: Vec<String>, last_selected: Option<String>) -> bool {
        if self.selected_widgets == selected && self.last_selected_widget == last_selected {
            return false;
        }
        self.selected_widgets = selected;
        self.last_selected_widget = last_selected;
        self.bump();
        true
    }

    pub fn set_widgets_to_expand(&mut self, widget_ids: Vec<String>) -> bool {
        if self.widgets_to_expand == widget_ids {
            return false;
        }
        self.widgets_to_expand = widget_ids;
        self.bump();
        true
    }

    /// Applies a selection request; `siblings` is the target's step in canvas order.
    pub fn apply_request(
        &mut self,
        request: SelectionRequestType,
        widget_id: &str,
        siblings: &[String],
    ) -> bool {
        match request {
            SelectionRequestType::One => {
                self.set_selection(vec![widget_id.to_string()], Some(widget_id.to_string()))
            }
            SelectionRequestType::PushPop => {
                let mut selected = self.selected_widgets.clone();
                let last = if let Some(pos) = selected.iter().position(|id| id == widget_id) {
                    selected.remove(pos);
                    selected.last().cloned()
                } else {
                    selected.push(widget_id.to_string());
                    Some(widget_id.to_string())
                };
                self.set_selection(selected, last)
            }
            SelectionRequestType::ShiftSelect => {
                let anchor = self
                    .last_selected_widget
                    .as_deref()
                    .and_then(|last| siblings.iter().position(|id| id == last));
                let target = siblings.iter().position(|id| id == widget_id);
                match (anchor, target) {
                    (Some(a), Some(t)) => {
                        let (start, end) = if a <= t { (a, t) } else { (t, a) };
                        let selected = siblings[start..=end].to_vec();
                        self.set_selection(selected, Some(widget_id.to_string()))
                    }
                    _ => self.apply_request(SelectionRequestType::One, widget_id, siblings),
                }
            }
        }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub page_id: String,
    pub search_keyword: String,
    pub page_permissions: Vec<String>,
    /// Rows whose expansion the user flipped from its derived starting value.
    pub toggled: FxHashSet<String>,
    pub cursor: usize,
    pub scroll_offset: usize,
    pub view_height: usize,
    pub visible_rows: usize,
}

impl ExplorerState {
    pub fn new(page_id: impl Into<String>) -> Self {
        Self {
            page_id: page_id.into(),
            search_keyword: String::new(),
            page_permissions: Vec::new(),
            toggled: FxHashSet::default(),
            cursor: 0,
            scroll_offset: 0,
            view_height: 20,
            visible_rows: 0,
        }
    }

    pub fn search_keyword(&self) -> Option<&str> {
        let keyword = self.search_keyword.trim();
        (!keyword.is_empty()).then_some(keyword)
    }

    pub fn set_search_keyword(&mut self, keyword: String) -> bool {
        if self.search_keyword == keyword {
            return false;
        }
        self.search_keyword = keyword;
        self.toggled.clear();
        self.cursor = 0;
        self.scroll_offset = 0;
        true
    }

    pub fn toggle(&mut self, widget_id: &str) -> bool {
        if !self.toggled.remove(widget_id) {
            self.toggled.insert(widget_id.to_string());
        }
        true
    }

    pub fn set_view_height(&mut self, height: usize) -> bool {
        let height = height.max(1);
        if self.view_height == height {
            return false;
        }
        self.view_height = height;
        self.keep_cursor_visible();
        true
    }

    pub fn set_visible_rows(&mut self, rows: usize) -> bool {
        if self.visible_rows == rows {
            return false;
        }
        self.visible_rows = rows;
        self.cursor = self.cursor.min(rows.saturating_sub(1));
        self.clamp_scroll();
        true
    }

    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if self.visible_rows == 0 || delta == 0 {
            return false;
        }
        let prev = self.cursor;
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor + delta as usize).min(self.visible_rows - 1)
        };
        self.keep_cursor_visible();
        self.cursor != prev
    }

    pub fn set_cursor(&mut self, row: usize) -> bool {
        if row >= self.visible_rows || row == self.cursor {
            return false;
        }
        self.cursor = row;
        self.keep_cursor_visible();
        true
    }

    pub fn scroll(&mut self, delta: isize) -> bool {
        if self.visible_rows == 0 || delta == 0 {
            return false;
        }
        let max_scroll = self.visible_rows.saturating_sub(self.view_height.max(1));
        let prev = self.scroll_offset;
        if delta > 0 {
            self.scroll_offset = (self.scroll_offset + delta as usize).min(max_scroll);
        } else {
            self.scroll_offset = self.scroll_offset.saturating_sub(delta.unsigned_abs());
        }
        self.scroll_offset != prev
    }

    fn keep_cursor_visible(&mut self) {
        let height = self.view_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    fn clamp_scroll(&mut self) {
        let max_scroll = self.visible_rows.saturating_sub(self.view_height.max(1));
        self.scroll_offset = self.scroll_offset.min(max_scroll);
    }
}

#[derive(Debug, Clone)]
pub struct ApplicationsState {
    pub workspace_id: String,
    pub title: String,
    pub title_tag: Option<String>,
    pub records: Vec<ApplicationRecord>,
    pub is_fetching_applications: bool,
    pub permissions: WorkspacePermissions,
    pub enable_import_export: bool,
    pub is_mobile: bool,
    pub empty_state_message: Option<String>,
    pub cursor: usize,
}

impl ApplicationsState {
    pub fn new(workspace_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            title: title.into(),
            title_tag: None,
            records: Vec::new(),
            is_fetching_applications: false,
            permissions: WorkspacePermissions::default(),
            enable_import_export: false,
            is_mobile: false,
            empty_state_message: None,
            cursor: 0,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) -> bool {
        if self.records.is_empty() || delta == 0 {
            return false;
        }
        let prev = self.cursor;
        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs())
        } else {
            (self.cursor + delta as usize).min(self.records.len() - 1)
        };
        self.cursor != prev
    }

    pub fn set_records(&mut self, records: Vec<ApplicationRecord>) -> bool {
        self.records = records;
        self.cursor = self.cursor.min(self.records.len().saturating_sub(1));
        true
    }
}

#[derive(Debug, Clone)]
pub struct CanvasState {
    pub tree: WidgetNode,
    /// Modal shown on the canvas, opened when navigating into it.
    pub open_modal: Option<String>,
}

impl CanvasState {
    pub fn new(tree: WidgetNode) -> Self {
        Self {
            tree,
            open_modal: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(WidgetNode::new("0", "MainContainer", WidgetType::CANVAS))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputDialogKind {
    RenameWidget { widget_id: String },
    RenameApplication { id: String },
    ExplorerSearch,
}

#[derive(Debug, Clone, Default)]
pub struct InputDialogState {
    pub visible: bool,
    pub title: String,
    pub value: String,
    pub kind: Option<InputDialogKind>,
}

impl InputDialogState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone)]
pub struct UiState {
    pub focus: FocusTarget,
    /// Current editor URL, the `fromUrl` of explorer analytics.
    pub location: String,
    pub input_dialog: InputDialogState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focus: FocusTarget::Explorer,
            location: String::from("/"),
            input_dialog: InputDialogState::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub selection: SelectionState,
    pub explorer: ExplorerState,
    pub applications: ApplicationsState,
    pub canvas: CanvasState,
    pub feature_flags: FeatureFlags,
    pub ui: UiState,
}

impl AppState {
    pub fn new(
        canvas: WidgetNode,
        page_id: impl Into<String>,
        applications: ApplicationsState,
    ) -> Self {
        Self {
            selection: SelectionState::new(),
            explorer: ExplorerState::new(page_id),
            applications,
            canvas: CanvasState::new(canvas),
            feature_flags: FeatureFlags::default(),
            ui: UiState::default(),
        }
    }

    pub fn gac_enabled(&self) -> bool {
        self.feature_flags.is_enabled(FeatureFlag::LicenseGacEnabled)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/state.rs"]
mod tests;
