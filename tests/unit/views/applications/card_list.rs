use super::*;
use crate::models::application::{
    PERMISSION_DELETE_APPLICATION, PERMISSION_EXPORT_APPLICATION, PERMISSION_MANAGE_APPLICATION,
    PERMISSION_READ_APPLICATION,
};

fn record(id: &str, permissions: &[&str]) -> ApplicationRecord {
    let mut app = ApplicationRecord::new(id, format!("App {id}"));
    app.user_permissions = permissions.iter().map(|p| p.to_string()).collect();
    app
}

fn props<'a>(records: &'a [ApplicationRecord], message: Option<&'a str>) -> CardListProps<'a> {
    CardListProps {
        workspace_id: "ws1",
        title: "Acme",
        title_tag: None,
        records,
        permissions: WorkspacePermissions::default(),
        enable_import_export: false,
        is_mobile: false,
        empty_state_message: message,
    }
}

#[test]
fn empty_records_render_one_empty_state_with_default_message() {
    let element = card_list(&props(&[], None), false, &AssetConfig::default());

    assert!(element.cards.is_empty());
    let empty = element.empty_state.expect("empty state");
    assert_eq!(empty.message, DEFAULT_EMPTY_STATE_MESSAGE);
    assert_eq!(empty.image_url, "https://assets.appsmith.com/no-applications.svg");
}

#[test]
fn empty_records_use_supplied_message_and_local_assets_when_airgapped() {
    let assets = AssetConfig {
        airgapped: true,
        ..AssetConfig::default()
    };
    let element = card_list(&props(&[], Some("Nothing here yet")), false, &assets);

    let empty = element.empty_state.expect("empty state");
    assert_eq!(empty.message, "Nothing here yet");
    assert_eq!(empty.image_url, "/assets/no-applications.svg");
}

#[test]
fn blank_empty_state_message_falls_back_to_default() {
    let element = card_list(&props(&[], Some("")), false, &AssetConfig::default());
    let empty = element.empty_state.expect("empty state");
    assert_eq!(empty.message, DEFAULT_EMPTY_STATE_MESSAGE);
}

#[test]
fn one_record_renders_one_card_and_no_empty_state() {
    let records = [record("a1", &[PERMISSION_READ_APPLICATION])];
    let element = card_list(&props(&records, Some("unused")), false, &AssetConfig::default());

    assert_eq!(element.cards.len(), 1);
    assert_eq!(element.cards[0].key, "a1");
    assert!(element.empty_state.is_none());
}

#[test]
fn cards_keep_record_order_and_loading_is_independent_of_emptiness() {
    let records = [record("b", &[]), record("a", &[]), record("c", &[])];
    let element = card_list(&props(&records, None), true, &AssetConfig::default());

    let keys: Vec<&str> = element.cards.iter().map(|c| c.key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
    assert!(element.is_loading);
    assert!(element.cards.iter().all(|c| c.is_fetching));

    let empty_loading = card_list(&props(&[], None), true, &AssetConfig::default());
    assert!(empty_loading.is_loading);
    assert!(empty_loading.empty_state.is_some());
}

#[test]
fn card_menu_follows_record_permissions() {
    let records = [
        record(
            "full",
            &[
                PERMISSION_READ_APPLICATION,
                PERMISSION_MANAGE_APPLICATION,
                PERMISSION_EXPORT_APPLICATION,
                PERMISSION_DELETE_APPLICATION,
            ],
        ),
        record("viewer", &[PERMISSION_READ_APPLICATION]),
    ];
    let mut p = props(&records, None);

    let element = card_list(&p, false, &AssetConfig::default());
    assert_eq!(
        element.cards[0].menu,
        vec![CardMenuItem::Launch, CardMenuItem::Edit, CardMenuItem::Delete]
    );
    assert_eq!(element.cards[1].menu, vec![CardMenuItem::Launch]);

    p.enable_import_export = true;
    let element = card_list(&p, false, &AssetConfig::default());
    assert!(element.cards[0].menu.contains(&CardMenuItem::Export));
}

#[test]
fn card_callbacks_map_to_store_actions() {
    let records = [
        record(
            "a1",
            &[PERMISSION_MANAGE_APPLICATION, PERMISSION_DELETE_APPLICATION],
        ),
        record("a2", &[PERMISSION_READ_APPLICATION]),
    ];
    let mut p = props(&records, None);
    p.permissions.has_create_new_application_permission = true;
    let element = card_list(&p, false, &AssetConfig::default());

    assert_eq!(
        element.add(),
        Some(Action::AddApplication {
            workspace_id: "ws1".to_string()
        })
    );
    assert_eq!(
        element.cards[0].delete(),
        Some(Action::DeleteApplication {
            id: "a1".to_string()
        })
    );
    assert_eq!(
        element.cards[0].update(UpdateApplicationPayload::rename("Renamed")),
        Some(Action::UpdateApplication {
            id: "a1".to_string(),
            payload: UpdateApplicationPayload::rename("Renamed"),
        })
    );
    assert_eq!(element.cards[1].delete(), None);
    assert_eq!(element.cards[1].update(UpdateApplicationPayload::rename("x")), None);
}

#[test]
fn add_is_hidden_without_create_permission() {
    let element = card_list(&props(&[], None), false, &AssetConfig::default());
    assert_eq!(element.add(), None);
}
