//! Service ports: traits + data contracts.

pub mod analytics;
pub mod navigation;
pub mod permissions;
pub mod registry;
pub mod routes;
pub mod settings;

pub use analytics::{AnalyticsEvent, AnalyticsSink, ENTITY_EXPLORER_CLICK};
pub use navigation::{NavigateRequest, NavigationMethod, Navigator};
pub use permissions::{has_manage_page_permission, FeatureFlag, FeatureFlags};
pub use registry::{EntityIcon, IconGlyph, WidgetCapability, WidgetRegistry};
pub use routes::{BuilderRoutes, RouteBuilder};
pub use settings::{AssetConfig, ExplorerSettings, Settings, ThemeSettings};
