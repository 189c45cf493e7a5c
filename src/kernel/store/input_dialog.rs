use crate::kernel::state::InputDialogKind;
use crate::kernel::Action;
use crate::models::UpdateApplicationPayload;

impl super::Store {
    pub(super) fn reduce_input_dialog_action(&mut self, action: Action) -> super::DispatchResult {
        match action {
            Action::InputDialogOpen(kind) => {
                let (title, value) = match &kind {
                    InputDialogKind::RenameWidget { widget_id } => (
                        "Rename widget".to_string(),
                        self.state
                            .canvas
                            .tree
                            .find(widget_id)
                            .map(|n| n.widget_name.clone())
                            .unwrap_or_default(),
                    ),
                    InputDialogKind::RenameApplication { id } => (
                        "Rename application".to_string(),
                        self.state
                            .applications
                            .records
                            .iter()
                            .find(|r| &r.id == id)
                            .map(|r| r.name.clone())
                            .unwrap_or_default(),
                    ),
                    InputDialogKind::ExplorerSearch => (
                        "Search widgets".to_string(),
                        self.state.explorer.search_keyword.clone(),
                    ),
                };
                let dialog = &mut self.state.ui.input_dialog;
                dialog.visible = true;
                dialog.title = title;
                dialog.value = value;
                dialog.kind = Some(kind);
                super::DispatchResult::changed(true)
            }
            Action::InputDialogAppend(ch) => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                self.state.ui.input_dialog.value.push(ch);
                self.sync_live_search();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogBackspace => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                let changed = self.state.ui.input_dialog.value.pop().is_some();
                self.sync_live_search();
                super::DispatchResult::changed(changed)
            }
            Action::InputDialogCancel => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                if self.state.ui.input_dialog.kind == Some(InputDialogKind::ExplorerSearch) {
                    self.state.explorer.set_search_keyword(String::new());
                }
                self.state.ui.input_dialog.reset();
                super::DispatchResult::changed(true)
            }
            Action::InputDialogConfirm => {
                if !self.state.ui.input_dialog.visible {
                    return super::DispatchResult::changed(false);
                }
                let value = std::mem::take(&mut self.state.ui.input_dialog.value);
                let kind = self.state.ui.input_dialog.kind.take();
                self.state.ui.input_dialog.reset();

                let follow_up = match kind {
                    Some(InputDialogKind::RenameWidget { widget_id }) => {
                        Some(Action::UpdateWidgetName {
                            widget_id,
                            new_name: value,
                        })
                    }
                    Some(InputDialogKind::RenameApplication { id }) => {
                        Some(Action::UpdateApplication {
                            id,
                            payload: UpdateApplicationPayload::rename(value),
                        })
                    }
                    Some(InputDialogKind::ExplorerSearch) | None => None,
                };

                let mut result = match follow_up {
                    Some(action) => self.dispatch(action),
                    None => super::DispatchResult::changed(false),
                };
                result.state_changed = true;
                result
            }
            _ => unreachable!("non-dialog action passed to reduce_input_dialog_action"),
        }
    }

    fn sync_live_search(&mut self) {
        if self.state.ui.input_dialog.kind == Some(InputDialogKind::ExplorerSearch) {
            let keyword = self.state.ui.input_dialog.value.clone();
            self.state.explorer.set_search_keyword(keyword);
        }
    }
}
