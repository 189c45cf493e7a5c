use crate::models::WidgetType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMethod {
    EntityExplorer,
    CanvasClick,
    CommandClick,
    Omnibar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigateRequest {
    pub widget_id: String,
    pub widget_type: WidgetType,
    pub page_id: String,
    pub method: NavigationMethod,
    pub is_selected: bool,
    pub is_multi_select: bool,
    pub is_shift_select: bool,
    pub parent_modal_id: Option<String>,
    pub widgets_in_step: Vec<String>,
}

/// Carries a navigation request to whatever owns the selection.
///
/// Navigation decides whether the gesture adds to or replaces the selection;
/// callers do not wait on or inspect the result.
pub trait Navigator {
    fn navigate_to_widget(&mut self, request: NavigateRequest);
}
