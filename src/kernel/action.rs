use crate::models::{ApplicationRecord, UpdateApplicationPayload, WidgetNode, WidgetType};

use super::state::{FocusTarget, InputDialogKind, SelectionRequestType};

/// Keyboard/mouse modifiers held while activating an explorer row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl ClickModifiers {
    pub fn is_multi_select(self) -> bool {
        self.meta || self.ctrl
    }

    pub fn is_shift_select(self) -> bool {
        self.shift
    }
}

/// Everything the store needs to log and navigate for one explorer click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivateWidget {
    pub widget_id: String,
    pub widget_type: WidgetType,
    pub widget_name: String,
    pub page_id: String,
    pub to_url: String,
    pub is_selected: bool,
    pub parent_modal_id: Option<String>,
    pub widgets_in_step: Vec<String>,
    pub modifiers: ClickModifiers,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Tick,
    SetFocus(FocusTarget),
    SetLocation(String),

    ExplorerSetViewHeight { height: usize },
    ExplorerSetVisibleRows { rows: usize },
    ExplorerMoveCursor { delta: isize },
    ExplorerSetCursor { row: usize },
    ExplorerScroll { delta: isize },
    ExplorerToggleExpand { widget_id: String },
    ExplorerSetSearchKeyword(String),
    ExplorerActivateWidget(ActivateWidget),

    SelectWidget {
        request: SelectionRequestType,
        widget_id: String,
        siblings: Vec<String>,
    },
    ShowModal { modal_id: Option<String> },
    UpdateWidgetName { widget_id: String, new_name: String },
    CanvasWidgetRenamed { widget_id: String, new_name: String },
    CanvasReplaced(WidgetNode),

    ApplicationsSetFetching(bool),
    ApplicationsLoaded(Vec<ApplicationRecord>),
    ApplicationsMoveCursor { delta: isize },
    AddApplication { workspace_id: String },
    DeleteApplication { id: String },
    UpdateApplication {
        id: String,
        payload: UpdateApplicationPayload,
    },
    ApplicationCreated(ApplicationRecord),
    ApplicationDeleted { id: String },
    ApplicationUpdated {
        id: String,
        payload: UpdateApplicationPayload,
    },

    InputDialogOpen(InputDialogKind),
    InputDialogAppend(char),
    InputDialogBackspace,
    InputDialogConfirm,
    InputDialogCancel,
}
