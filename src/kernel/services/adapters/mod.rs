//! Service adapters: concrete implementations of the ports (IO, logging, in-memory API).

pub mod analytics;
pub mod backend;
pub mod fixtures;
pub mod navigation;
pub mod paths;
pub mod settings;

pub use analytics::{RecordingAnalytics, TracingAnalytics};
pub use backend::InMemoryBackend;
pub use fixtures::{
    demo_canvas, demo_workspace, load_canvas, load_workspace, FixtureError, WorkspaceFixture,
};
pub use navigation::{selection_request_type, DispatchNavigator};
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir};
pub use settings::{
    ensure_settings_file, get_settings_path, load_settings, load_settings_from,
    registry_from_settings,
};
