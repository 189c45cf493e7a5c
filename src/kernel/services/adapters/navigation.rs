//! Explorer navigation resolved into store actions.

use crate::kernel::services::ports::{NavigateRequest, Navigator, RouteBuilder};
use crate::kernel::state::SelectionRequestType;
use crate::kernel::Action;

/// Translates navigation requests into selection, modal and location actions.
///
/// The host drains [`DispatchNavigator::take_actions`] and dispatches them.
pub struct DispatchNavigator<R> {
    routes: R,
    pending: Vec<Action>,
}

impl<R: RouteBuilder> DispatchNavigator<R> {
    pub fn new(routes: R) -> Self {
        Self {
            routes,
            pending: Vec::new(),
        }
    }

    pub fn take_actions(&mut self) -> Vec<Action> {
        std::mem::take(&mut self.pending)
    }
}

pub fn selection_request_type(request: &NavigateRequest) -> SelectionRequestType {
    if request.is_shift_select {
        SelectionRequestType::ShiftSelect
    } else if request.is_multi_select {
        SelectionRequestType::PushPop
    } else {
        SelectionRequestType::One
    }
}

impl<R: RouteBuilder> Navigator for DispatchNavigator<R> {
    fn navigate_to_widget(&mut self, request: NavigateRequest) {
        let request_type = selection_request_type(&request);
        tracing::debug!(
            widget_id = %request.widget_id,
            widget_type = %request.widget_type,
            method = ?request.method,
            ?request_type,
            "navigate to widget"
        );

        self.pending
            .push(Action::ShowModal {
                modal_id: request.parent_modal_id.clone(),
            });
        self.pending.push(Action::SetLocation(
            self.routes
                .builder_url(&request.page_id, Some(&request.widget_id)),
        ));
        self.pending.push(Action::SelectWidget {
            request: request_type,
            widget_id: request.widget_id,
            siblings: request.widgets_in_step,
        });
    }
}
