use crate::kernel::{Action, Effect};

impl super::Store {
    pub(super) fn reduce_applications_action(&mut self, action: Action) -> super::DispatchResult {
        let apps = &mut self.state.applications;
        match action {
            Action::ApplicationsSetFetching(fetching) => {
                let changed = apps.is_fetching_applications != fetching;
                apps.is_fetching_applications = fetching;
                super::DispatchResult::changed(changed)
            }
            Action::ApplicationsLoaded(records) => {
                apps.is_fetching_applications = false;
                super::DispatchResult::changed(apps.set_records(records))
            }
            Action::ApplicationsMoveCursor { delta } => {
                super::DispatchResult::changed(apps.move_cursor(delta))
            }
            Action::AddApplication { workspace_id } => {
                super::DispatchResult::effects(vec![Effect::AddApplication { workspace_id }])
            }
            Action::DeleteApplication { id } => {
                super::DispatchResult::effects(vec![Effect::DeleteApplication { id }])
            }
            Action::UpdateApplication { id, payload } => {
                super::DispatchResult::effects(vec![Effect::UpdateApplication { id, payload }])
            }
            Action::ApplicationCreated(record) => {
                tracing::debug!(id = %record.id, "application created");
                apps.records.push(record);
                super::DispatchResult::changed(true)
            }
            Action::ApplicationDeleted { id } => {
                let before = apps.records.len();
                apps.records.retain(|r| r.id != id);
                let changed = apps.records.len() != before;
                if changed {
                    apps.cursor = apps.cursor.min(apps.records.len().saturating_sub(1));
                }
                super::DispatchResult::changed(changed)
            }
            Action::ApplicationUpdated { id, payload } => {
                let Some(record) = apps.records.iter_mut().find(|r| r.id == id) else {
                    return super::DispatchResult::changed(false);
                };
                record.apply_update(&payload);
                super::DispatchResult::changed(true)
            }
            _ => unreachable!("non-applications action passed to reduce_applications_action"),
        }
    }
}
