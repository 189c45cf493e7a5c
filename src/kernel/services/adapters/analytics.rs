use crate::kernel::services::ports::{AnalyticsEvent, AnalyticsSink};

/// Writes analytics events to the log.
#[derive(Debug, Default)]
pub struct TracingAnalytics;

impl AnalyticsSink for TracingAnalytics {
    fn log_event(&mut self, event: AnalyticsEvent) {
        tracing::info!(
            target: "analytics",
            event_name = event.name,
            payload = %event.payload,
            "analytics event"
        );
    }
}

/// Keeps events in memory, in emission order.
#[derive(Debug, Default)]
pub struct RecordingAnalytics {
    events: Vec<AnalyticsEvent>,
}

impl RecordingAnalytics {
    pub fn events(&self) -> &[AnalyticsEvent] {
        &self.events
    }
}

impl AnalyticsSink for RecordingAnalytics {
    fn log_event(&mut self, event: AnalyticsEvent) {
        self.events.push(event);
    }
}
