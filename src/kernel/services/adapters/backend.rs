//! In-memory stand-in for the application/page API.
//!
//! Mutation effects come back as follow-up actions, the way an API response
//! would update the store.

use crate::kernel::{Action, Effect};
use crate::models::application::{
    PERMISSION_DELETE_APPLICATION, PERMISSION_MANAGE_APPLICATION, PERMISSION_READ_APPLICATION,
};
use crate::models::ApplicationRecord;

#[derive(Debug, Default)]
pub struct InMemoryBackend {
    created: usize,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs one mutation effect; non-mutation effects yield nothing.
    pub fn apply(&mut self, effect: &Effect) -> Vec<Action> {
        match effect {
            Effect::UpdateWidgetName {
                widget_id,
                new_name,
            } => vec![Action::CanvasWidgetRenamed {
                widget_id: widget_id.clone(),
                new_name: new_name.clone(),
            }],
            Effect::AddApplication { workspace_id } => {
                self.created += 1;
                let mut record = ApplicationRecord::new(
                    format!("app-new-{}", self.created),
                    format!("Untitled application {}", self.created),
                );
                record.workspace_id = workspace_id.clone();
                record.user_permissions = vec![
                    PERMISSION_READ_APPLICATION.to_string(),
                    PERMISSION_MANAGE_APPLICATION.to_string(),
                    PERMISSION_DELETE_APPLICATION.to_string(),
                ];
                vec![Action::ApplicationCreated(record)]
            }
            Effect::DeleteApplication { id } => {
                vec![Action::ApplicationDeleted { id: id.clone() }]
            }
            Effect::UpdateApplication { id, payload } => vec![Action::ApplicationUpdated {
                id: id.clone(),
                payload: payload.clone(),
            }],
            Effect::LogAnalytics(_) | Effect::NavigateToWidget(_) => Vec::new(),
        }
    }
}
