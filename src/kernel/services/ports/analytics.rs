use serde::Serialize;
use serde_json::Value;

pub const ENTITY_EXPLORER_CLICK: &str = "ENTITY_EXPLORER_CLICK";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsEvent {
    pub name: &'static str,
    pub payload: Value,
}

impl AnalyticsEvent {
    pub fn entity_explorer_click(from_url: &str, to_url: &str, name: &str) -> Self {
        Self {
            name: ENTITY_EXPLORER_CLICK,
            payload: serde_json::json!({
                "type": "WIDGETS",
                "fromUrl": from_url,
                "toUrl": to_url,
                "name": name,
            }),
        }
    }
}

/// Fire-and-forget analytics logger.
pub trait AnalyticsSink {
    fn log_event(&mut self, event: AnalyticsEvent);
}
