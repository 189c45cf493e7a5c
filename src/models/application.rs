//! Application records listed on the workspace page.

use serde::{Deserialize, Serialize};

pub const PERMISSION_READ_APPLICATION: &str = "read:applications";
pub const PERMISSION_MANAGE_APPLICATION: &str = "manage:applications";
pub const PERMISSION_DELETE_APPLICATION: &str = "delete:applications";
pub const PERMISSION_EXPORT_APPLICATION: &str = "export:applications";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub workspace_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub user_permissions: Vec<String>,
}

impl ApplicationRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            workspace_id: String::new(),
            icon: None,
            color: None,
            default_page_id: None,
            modified_by: None,
            modified_at: None,
            is_public: false,
            user_permissions: Vec::new(),
        }
    }

    fn has_permission(&self, permission: &str) -> bool {
        self.user_permissions.iter().any(|p| p == permission)
    }

    pub fn can_read(&self) -> bool {
        self.has_permission(PERMISSION_READ_APPLICATION)
    }

    pub fn can_edit(&self) -> bool {
        self.has_permission(PERMISSION_MANAGE_APPLICATION)
    }

    pub fn can_delete(&self) -> bool {
        self.has_permission(PERMISSION_DELETE_APPLICATION)
    }

    pub fn can_export(&self) -> bool {
        self.has_permission(PERMISSION_EXPORT_APPLICATION)
    }

    /// Applies the non-empty fields of `payload`.
    pub fn apply_update(&mut self, payload: &UpdateApplicationPayload) {
        if let Some(name) = &payload.name {
            self.name = name.clone();
        }
        if let Some(icon) = &payload.icon {
            self.icon = Some(icon.clone());
        }
        if let Some(color) = &payload.color {
            self.color = Some(color.clone());
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl UpdateApplicationPayload {
    pub fn rename(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Workspace-level flags handed to every card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspacePermissions {
    #[serde(default)]
    pub can_invite_to_workspace: bool,
    #[serde(default)]
    pub has_create_new_application_permission: bool,
    #[serde(default)]
    pub has_manage_workspace_permissions: bool,
}
