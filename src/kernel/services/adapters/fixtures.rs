//! Canvas and workspace data loaded from JSON files.

use crate::kernel::{AppState, ApplicationsState};
use crate::models::{ApplicationRecord, WidgetNode, WorkspacePermissions};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const DEMO_CANVAS: &str = include_str!("../../../../demos/canvas.json");
const DEMO_WORKSPACE: &str = include_str!("../../../../demos/workspace.json");

#[derive(Debug)]
pub enum FixtureError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Io(err) => write!(f, "cannot read fixture: {err}"),
            FixtureError::Parse(err) => write!(f, "invalid fixture json: {err}"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Io(err) => Some(err),
            FixtureError::Parse(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for FixtureError {
    fn from(err: std::io::Error) -> Self {
        FixtureError::Io(err)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Parse(err)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceFixture {
    pub workspace_id: String,
    pub title: String,
    #[serde(default)]
    pub title_tag: Option<String>,
    #[serde(default)]
    pub empty_state_message: Option<String>,
    #[serde(default)]
    pub permissions: WorkspacePermissions,
    #[serde(default)]
    pub enable_import_export: bool,
    #[serde(default)]
    pub page_id: String,
    #[serde(default)]
    pub page_permissions: Vec<String>,
    #[serde(default)]
    pub applications: Vec<ApplicationRecord>,
}

impl WorkspaceFixture {
    /// Initial state for one page of this workspace.
    pub fn into_app_state(self, canvas: WidgetNode) -> AppState {
        let mut applications = ApplicationsState::new(self.workspace_id, self.title);
        applications.title_tag = self.title_tag;
        applications.empty_state_message = self.empty_state_message;
        applications.permissions = self.permissions;
        applications.enable_import_export = self.enable_import_export;
        applications.set_records(self.applications);

        let mut state = AppState::new(canvas, self.page_id, applications);
        state.explorer.page_permissions = self.page_permissions;
        state
    }
}

pub fn parse_canvas(json: &str) -> Result<WidgetNode, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_workspace(json: &str) -> Result<WorkspaceFixture, FixtureError> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_canvas(path: &Path) -> Result<WidgetNode, FixtureError> {
    let data = std::fs::read_to_string(path)?;
    parse_canvas(&data)
}

pub fn load_workspace(path: &Path) -> Result<WorkspaceFixture, FixtureError> {
    let data = std::fs::read_to_string(path)?;
    parse_workspace(&data)
}

pub fn demo_canvas() -> Result<WidgetNode, FixtureError> {
    parse_canvas(DEMO_CANVAS)
}

pub fn demo_workspace() -> Result<WorkspaceFixture, FixtureError> {
    parse_workspace(DEMO_WORKSPACE)
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/fixtures.rs"]
mod tests;
