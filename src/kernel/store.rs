use crate::kernel::services::ports::{AnalyticsEvent, NavigateRequest, NavigationMethod};

use super::{Action, AppState, Effect};

mod applications;
mod explorer;
mod input_dialog;

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }

    fn effects(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            state_changed: false,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Tick => DispatchResult::changed(false),
            Action::SetFocus(focus) => {
                let prev = self.state.ui.focus;
                self.state.ui.focus = focus;
                DispatchResult::changed(prev != focus)
            }
            Action::SetLocation(location) => {
                if self.state.ui.location == location {
                    return DispatchResult::changed(false);
                }
                self.state.ui.location = location;
                DispatchResult::changed(true)
            }
            Action::ExplorerActivateWidget(activate) => {
                // Analytics is logged before navigation runs.
                let analytics = AnalyticsEvent::entity_explorer_click(
                    &self.state.ui.location,
                    &activate.to_url,
                    &activate.widget_name,
                );
                let request = NavigateRequest {
                    widget_id: activate.widget_id,
                    widget_type: activate.widget_type,
                    page_id: activate.page_id,
                    method: NavigationMethod::EntityExplorer,
                    is_selected: activate.is_selected,
                    is_multi_select: activate.modifiers.is_multi_select(),
                    is_shift_select: activate.modifiers.is_shift_select(),
                    parent_modal_id: activate.parent_modal_id,
                    widgets_in_step: activate.widgets_in_step,
                };
                DispatchResult::effects(vec![
                    Effect::LogAnalytics(analytics),
                    Effect::NavigateToWidget(request),
                ])
            }
            Action::ExplorerSetViewHeight { .. }
            | Action::ExplorerSetVisibleRows { .. }
            | Action::ExplorerMoveCursor { .. }
            | Action::ExplorerSetCursor { .. }
            | Action::ExplorerScroll { .. }
            | Action::ExplorerToggleExpand { .. }
            | Action::ExplorerSetSearchKeyword(_)
            | Action::SelectWidget { .. }
            | Action::ShowModal { .. }
            | Action::UpdateWidgetName { .. }
            | Action::CanvasWidgetRenamed { .. }
            | Action::CanvasReplaced(_) => self.reduce_explorer_action(action),
            Action::ApplicationsSetFetching(_)
            | Action::ApplicationsLoaded(_)
            | Action::ApplicationsMoveCursor { .. }
            | Action::AddApplication { .. }
            | Action::DeleteApplication { .. }
            | Action::UpdateApplication { .. }
            | Action::ApplicationCreated(_)
            | Action::ApplicationDeleted { .. }
            | Action::ApplicationUpdated { .. } => self.reduce_applications_action(action),
            Action::InputDialogOpen(_)
            | Action::InputDialogAppend(_)
            | Action::InputDialogBackspace
            | Action::InputDialogConfirm
            | Action::InputDialogCancel => self.reduce_input_dialog_action(action),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
