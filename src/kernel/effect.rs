use crate::kernel::services::ports::{AnalyticsEvent, NavigateRequest};
use crate::models::UpdateApplicationPayload;

/// Side effects requested by the store, executed in order by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    LogAnalytics(AnalyticsEvent),
    NavigateToWidget(NavigateRequest),
    UpdateWidgetName {
        widget_id: String,
        new_name: String,
    },
    AddApplication {
        workspace_id: String,
    },
    DeleteApplication {
        id: String,
    },
    UpdateApplication {
        id: String,
        payload: UpdateApplicationPayload,
    },
}
