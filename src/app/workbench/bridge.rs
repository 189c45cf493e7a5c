use super::Workbench;
use crate::kernel::services::ports::Navigator;
use crate::kernel::{Action as KernelAction, Effect};
use crate::views::explorer::flatten_visible;

impl Workbench {
    /// Dispatches into the store and runs the resulting effects in order.
    pub fn dispatch_kernel(&mut self, action: KernelAction) -> bool {
        let result = self.store.dispatch(action);
        let mut state_changed = result.state_changed;
        for effect in result.effects {
            state_changed |= self.run_effect(effect);
        }
        state_changed |= self.sync_visible_rows();
        state_changed
    }

    fn run_effect(&mut self, effect: Effect) -> bool {
        match effect {
            Effect::LogAnalytics(event) => {
                self.analytics.log_event(event);
                false
            }
            Effect::NavigateToWidget(request) => {
                self.navigator.navigate_to_widget(request);
                let mut changed = false;
                for action in self.navigator.take_actions() {
                    changed |= self.dispatch_kernel(action);
                }
                changed
            }
            effect @ (Effect::UpdateWidgetName { .. }
            | Effect::AddApplication { .. }
            | Effect::DeleteApplication { .. }
            | Effect::UpdateApplication { .. }) => {
                let mut changed = false;
                for action in self.backend.apply(&effect) {
                    changed |= self.dispatch_kernel(action);
                }
                changed
            }
        }
    }

    /// Keeps the explorer cursor bounds in step with the rows on screen.
    pub(super) fn sync_visible_rows(&mut self) -> bool {
        let rows = flatten_visible(&self.entity_tree()).len();
        if rows == self.store.state().explorer.visible_rows {
            return false;
        }
        self.store
            .dispatch(KernelAction::ExplorerSetVisibleRows { rows })
            .state_changed
    }
}
