//! Application cards of a workspace page.

use crate::kernel::services::ports::AssetConfig;
use crate::kernel::{Action, ApplicationsState};
use crate::models::{ApplicationRecord, UpdateApplicationPayload, WorkspacePermissions};

pub const DEFAULT_EMPTY_STATE_MESSAGE: &str = "There are no applications in this workspace.";
pub const EMPTY_STATE_IMAGE: &str = "no-applications.svg";

#[derive(Debug, Clone, Copy)]
pub struct CardListProps<'a> {
    pub workspace_id: &'a str,
    pub title: &'a str,
    pub title_tag: Option<&'a str>,
    pub records: &'a [ApplicationRecord],
    pub permissions: WorkspacePermissions,
    pub enable_import_export: bool,
    pub is_mobile: bool,
    pub empty_state_message: Option<&'a str>,
}

impl<'a> CardListProps<'a> {
    pub fn from_state(state: &'a ApplicationsState) -> Self {
        Self {
            workspace_id: &state.workspace_id,
            title: &state.title,
            title_tag: state.title_tag.as_deref(),
            records: &state.records,
            permissions: state.permissions,
            enable_import_export: state.enable_import_export,
            is_mobile: state.is_mobile,
            empty_state_message: state.empty_state_message.as_deref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMenuItem {
    Launch,
    Edit,
    Export,
    Delete,
}

impl CardMenuItem {
    pub fn label(self) -> &'static str {
        match self {
            CardMenuItem::Launch => "Launch",
            CardMenuItem::Edit => "Edit",
            CardMenuItem::Export => "Export",
            CardMenuItem::Delete => "Delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationCard {
    /// Record id; cards keep the order of the input records.
    pub key: String,
    pub application: ApplicationRecord,
    pub permissions: WorkspacePermissions,
    pub enable_import_export: bool,
    pub is_mobile: bool,
    pub is_fetching: bool,
    pub menu: Vec<CardMenuItem>,
}

impl ApplicationCard {
    fn new(record: &ApplicationRecord, props: &CardListProps<'_>, is_fetching: bool) -> Self {
        let mut menu = Vec::with_capacity(4);
        if record.can_read() {
            menu.push(CardMenuItem::Launch);
        }
        if record.can_edit() {
            menu.push(CardMenuItem::Edit);
        }
        if props.enable_import_export && record.can_export() {
            menu.push(CardMenuItem::Export);
        }
        if record.can_delete() {
            menu.push(CardMenuItem::Delete);
        }

        Self {
            key: record.id.clone(),
            application: record.clone(),
            permissions: props.permissions,
            enable_import_export: props.enable_import_export,
            is_mobile: props.is_mobile,
            is_fetching,
            menu,
        }
    }

    pub fn delete(&self) -> Option<Action> {
        self.menu
            .contains(&CardMenuItem::Delete)
            .then(|| Action::DeleteApplication {
                id: self.key.clone(),
            })
    }

    pub fn update(&self, payload: UpdateApplicationPayload) -> Option<Action> {
        self.menu
            .contains(&CardMenuItem::Edit)
            .then(|| Action::UpdateApplication {
                id: self.key.clone(),
                payload,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub image_url: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardListElement {
    pub workspace_id: String,
    pub title: String,
    pub title_tag: Option<String>,
    pub is_loading: bool,
    pub is_mobile: bool,
    pub can_create: bool,
    pub cards: Vec<ApplicationCard>,
    pub empty_state: Option<EmptyState>,
}

impl CardListElement {
    /// Create request; gated on the workspace create permission.
    pub fn add(&self) -> Option<Action> {
        self.can_create.then(|| Action::AddApplication {
            workspace_id: self.workspace_id.clone(),
        })
    }
}

pub fn card_list(props: &CardListProps<'_>, is_fetching: bool, assets: &AssetConfig) -> CardListElement {
    let cards: Vec<ApplicationCard> = props
        .records
        .iter()
        .map(|record| ApplicationCard::new(record, props, is_fetching))
        .collect();

    let empty_state = cards.is_empty().then(|| EmptyState {
        image_url: assets.asset_url(EMPTY_STATE_IMAGE),
        message: props
            .empty_state_message
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_EMPTY_STATE_MESSAGE)
            .to_string(),
    });

    CardListElement {
        workspace_id: props.workspace_id.to_string(),
        title: props.title.to_string(),
        title_tag: props.title_tag.map(str::to_string),
        is_loading: is_fetching,
        is_mobile: props.is_mobile,
        can_create: props.permissions.has_create_new_application_permission,
        cards,
        empty_state,
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/views/applications/card_list.rs"]
mod tests;
