use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_explorer_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::ExplorerSetViewHeight { height } => {
                super::DispatchResult::changed(self.state.explorer.set_view_height(height))
            }
            Action::ExplorerSetVisibleRows { rows } => {
                super::DispatchResult::changed(self.state.explorer.set_visible_rows(rows))
            }
            Action::ExplorerMoveCursor { delta } => {
                super::DispatchResult::changed(self.state.explorer.move_cursor(delta))
            }
            Action::ExplorerSetCursor { row } => {
                super::DispatchResult::changed(self.state.explorer.set_cursor(row))
            }
            Action::ExplorerScroll { delta } => {
                super::DispatchResult::changed(self.state.explorer.scroll(delta))
            }
            Action::ExplorerToggleExpand { widget_id } => {
                super::DispatchResult::changed(self.state.explorer.toggle(&widget_id))
            }
            Action::ExplorerSetSearchKeyword(keyword) => {
                super::DispatchResult::changed(self.state.explorer.set_search_keyword(keyword))
            }
            Action::SelectWidget {
                request,
                widget_id,
                siblings,
            } => {
                let mut changed =
                    self.state
                        .selection
                        .apply_request(request, &widget_id, &siblings);
                if changed {
                    tracing::debug!(
                        widget_id = %widget_id,
                        ?request,
                        selected = self.state.selection.selected_widgets().len(),
                        "widget selection changed"
                    );
                    changed |= self.refresh_widgets_to_expand();
                }
                super::DispatchResult::changed(changed)
            }
            Action::ShowModal { modal_id } => {
                if self.state.canvas.open_modal == modal_id {
                    return super::DispatchResult::changed(false);
                }
                self.state.canvas.open_modal = modal_id;
                super::DispatchResult::changed(true)
            }
            Action::UpdateWidgetName {
                widget_id,
                new_name,
            } => super::DispatchResult::effects(vec![Effect::UpdateWidgetName {
                widget_id,
                new_name,
            }]),
            Action::CanvasWidgetRenamed {
                widget_id,
                new_name,
            } => {
                let changed = self.state.canvas.tree.rename(&widget_id, &new_name);
                if !changed {
                    tracing::warn!(widget_id = %widget_id, "renamed widget is not on the canvas");
                }
                super::DispatchResult::changed(changed)
            }
            Action::CanvasReplaced(tree) => {
                self.state.canvas.tree = tree;
                let selected: Vec<String> = self
                    .state
                    .selection
                    .selected_widgets()
                    .iter()
                    .filter(|id| self.state.canvas.tree.find(id).is_some())
                    .cloned()
                    .collect();
                let last = self
                    .state
                    .selection
                    .last_selected_widget()
                    .filter(|id| self.state.canvas.tree.find(id).is_some())
                    .map(str::to_string);
                self.state.selection.set_selection(selected, last);
                if let Some(modal) = self.state.canvas.open_modal.as_deref() {
                    if self.state.canvas.tree.find(modal).is_none() {
                        self.state.canvas.open_modal = None;
                    }
                }
                self.refresh_widgets_to_expand();
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-explorer action passed to reduce_explorer_action"),
        }
    }

    /// Force-expands every ancestor of a selected widget so the selection is visible.
    fn refresh_widgets_to_expand(&mut self) -> bool {
        let mut to_expand: Vec<String> = Vec::new();
        for widget_id in self.state.selection.selected_widgets() {
            let Some(ancestors) = self.state.canvas.tree.ancestors_of(widget_id) else {
                continue;
            };
            for ancestor in ancestors {
                if !to_expand.contains(&ancestor) {
                    to_expand.push(ancestor);
                }
            }
        }
        // A forced expansion wins over an earlier manual collapse.
        for widget_id in &to_expand {
            self.state.explorer.toggled.remove(widget_id);
        }
        self.state.selection.set_widgets_to_expand(to_expand)
    }
}
