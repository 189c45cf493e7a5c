use super::*;
use crate::kernel::services::ports::BuilderRoutes;
use crate::kernel::SelectionRequestType;
use std::rc::Rc;

fn no_siblings() -> Rc<[String]> {
    Rc::from(Vec::new())
}

fn node(id: &str, ty: &str) -> WidgetNode {
    WidgetNode::new(id, format!("{id}_name"), ty)
}

fn page() -> WidgetNode {
    WidgetNode::new("0", "MainContainer", WidgetType::CANVAS).with_children(vec![
        node("w1", WidgetType::BUTTON),
        node("w2", WidgetType::TEXT),
        node("m1", WidgetType::MODAL).with_children(vec![node("mc", WidgetType::CANVAS)
            .with_children(vec![
                node("mb", WidgetType::BUTTON),
                node("m2", WidgetType::MODAL).with_children(vec![node("inner", WidgetType::TEXT)]),
                node("icon", WidgetType::ICON),
            ])]),
        node("ic", WidgetType::ICON).with_children(vec![node("under_icon", WidgetType::TEXT)]),
    ])
}

struct Fixture {
    selection: SelectionState,
    registry: WidgetRegistry,
    routes: BuilderRoutes,
    toggled: FxHashSet<String>,
    memo: SelectionFlagsCache,
    can_manage_pages: bool,
}

impl Fixture {
    fn new(selection: SelectionState) -> Self {
        Self {
            selection,
            registry: WidgetRegistry::builtin(),
            routes: BuilderRoutes::new("app"),
            toggled: FxHashSet::default(),
            memo: SelectionFlagsCache::new(),
            can_manage_pages: true,
        }
    }

    fn ctx(&self) -> EntityContext<'_> {
        EntityContext {
            selection: &self.selection,
            registry: &self.registry,
            routes: &self.routes,
            can_manage_pages: self.can_manage_pages,
            toggled: &self.toggled,
            memo: &self.memo,
        }
    }
}

fn render_root(tree: &WidgetNode, fx: &Fixture, keyword: Option<&str>) -> EntityNode {
    let props = WidgetEntityProps {
        search_keyword: keyword,
        ..WidgetEntityProps::from_node(tree, "p1", no_siblings())
    };
    widget_entity(&props, &fx.ctx()).unwrap()
}

fn find<'a>(rows: &[&'a EntityRow], id: &str) -> &'a EntityRow {
    rows.iter().copied().find(|r| r.entity_id == id).unwrap()
}

fn count_expected(node: &WidgetNode, registry: &WidgetRegistry) -> usize {
    if !registry.is_renderable_in_explorer(&node.widget_type) {
        return 0;
    }
    1 + node
        .children()
        .iter()
        .map(|c| count_expected(c, registry))
        .sum::<usize>()
}

#[test]
fn row_count_skips_hidden_types_and_their_subtrees() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    assert_eq!(rows.len(), count_expected(&tree, &fx.registry));
    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|r| r.entity_id != "icon"));
    assert!(rows.iter().all(|r| r.entity_id != "under_icon"));
}

#[test]
fn hidden_root_renders_nothing() {
    let fx = Fixture::new(SelectionState::new());
    let tree = node("ic", WidgetType::ICON).with_children(vec![node("t", WidgetType::TEXT)]);
    let props = WidgetEntityProps::from_node(&tree, "p1", no_siblings());
    assert!(widget_entity(&props, &fx.ctx()).is_none());
}

#[test]
fn rows_follow_preorder_with_increasing_steps() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    let ids: Vec<&str> = rows.iter().map(|r| r.entity_id.as_str()).collect();
    assert_eq!(ids, vec!["0", "w1", "w2", "m1", "mc", "mb", "m2", "inner"]);
    assert_eq!(find(&rows, "0").step, 0);
    assert_eq!(find(&rows, "mc").step, 2);
    assert_eq!(find(&rows, "inner").step, 4);
}

#[test]
fn descendants_track_nearest_modal() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    assert_eq!(find(&rows, "w1").parent_modal_id, None);
    assert_eq!(find(&rows, "m1").parent_modal_id, None);
    assert_eq!(find(&rows, "mc").parent_modal_id.as_deref(), Some("m1"));
    assert_eq!(find(&rows, "mb").parent_modal_id.as_deref(), Some("m1"));
    assert_eq!(find(&rows, "m2").parent_modal_id.as_deref(), Some("m1"));
    assert_eq!(find(&rows, "inner").parent_modal_id.as_deref(), Some("m2"));
}

#[test]
fn single_selection_marks_selected_and_highlighted() {
    let fx = Fixture::new(SelectionState::with_selection(&["w2"], Some("w2")));
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    let w2 = find(&rows, "w2");
    assert!(w2.active);
    assert!(w2.highlight);
    let w1 = find(&rows, "w1");
    assert!(!w1.active);
    assert!(!w1.highlight);
    assert!(rows.iter().all(|r| r.context_menu.is_some()));
}

#[test]
fn multi_selection_hides_every_context_menu() {
    let fx = Fixture::new(SelectionState::with_selection(&["w1", "w2"], Some("w2")));
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    assert!(rows.iter().all(|r| r.context_menu.is_none()));
    assert!(find(&rows, "w1").active);
    assert!(!find(&rows, "w1").highlight);
}

#[test]
fn empty_selection_keeps_context_menu() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    let menu = find(&rows, "w1").context_menu.clone().unwrap();
    assert_eq!(menu.widget_id, "w1");
    assert_eq!(menu.page_id, "p1");
    assert!(menu.can_manage_pages);
}

#[test]
fn search_keyword_expands_rows_with_children() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, Some("button"));
    let rows = flatten_all(std::slice::from_ref(&root));

    let m1 = find(&rows, "m1");
    assert!(m1.has_children);
    assert!(!m1.force_expand);
    assert!(m1.is_default_expanded);
    assert!(m1.expanded);

    let w1 = find(&rows, "w1");
    assert!(!w1.is_default_expanded);
    assert_eq!(w1.search_keyword.as_deref(), Some("button"));
}

#[test]
fn rows_start_collapsed_without_keyword_flag_or_force_expand() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));
    assert!(!find(&rows, "m1").expanded);

    let visible = flatten_visible(std::slice::from_ref(&root));
    assert_eq!(visible.len(), 1);
}

#[test]
fn force_expand_set_opens_rows() {
    let mut selection = SelectionState::new();
    let tree = page();
    selection.apply_request(SelectionRequestType::One, "mb", &[]);
    selection.set_widgets_to_expand(tree.ancestors_of("mb").unwrap());
    let fx = Fixture::new(selection);

    let root = render_root(&tree, &fx, None);
    let visible = flatten_visible(std::slice::from_ref(&root));
    let ids: Vec<&str> = visible.iter().map(|r| r.entity_id.as_str()).collect();
    assert!(ids.contains(&"mb"));
    assert!(find(&visible, "m1").force_expand);
    assert!(!find(&visible, "m2").expanded);
}

#[test]
fn default_expanded_flag_applies_to_the_row_only() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let props = WidgetEntityProps {
        is_default_expanded: true,
        ..WidgetEntityProps::from_node(&tree, "p1", no_siblings())
    };
    let root = widget_entity(&props, &fx.ctx()).unwrap();
    assert!(root.row.expanded);
    let m1 = root.children.iter().find(|c| c.row.entity_id == "m1").unwrap();
    assert!(!m1.row.expanded);
}

#[test]
fn user_toggle_flips_starting_expansion() {
    let mut fx = Fixture::new(SelectionState::new());
    fx.toggled.insert("m1".to_string());
    let tree = page();

    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));
    assert!(find(&rows, "m1").expanded);

    let root = render_root(&tree, &fx, Some("modal"));
    let rows = flatten_all(std::slice::from_ref(&root));
    assert!(!find(&rows, "m1").expanded);
}

#[test]
fn icons_fall_back_for_unregistered_types() {
    let fx = Fixture::new(SelectionState::new());
    let tree = WidgetNode::new("0", "Main", WidgetType::CANVAS).with_children(vec![
        node("map", "MAP_WIDGET"),
        node("btn", WidgetType::BUTTON),
    ]);
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));

    assert_eq!(
        find(&rows, "map").icon,
        EntityIcon::Fallback(WidgetType::new("MAP_WIDGET"))
    );
    assert!(matches!(find(&rows, "btn").icon, EntityIcon::Registered(_)));
}

#[test]
fn page_permissions_gate_editing() {
    let mut fx = Fixture::new(SelectionState::new());
    fx.can_manage_pages = false;
    let tree = page();
    let root = render_root(&tree, &fx, None);

    assert!(!root.row.can_edit_entity_name);
    assert!(!root.row.show_add_button);
    assert!(root.row.rename("x").is_none());
    assert!(!root.row.context_menu.clone().unwrap().can_manage_pages);
}

#[test]
fn activation_carries_gesture_and_route() {
    let fx = Fixture::new(SelectionState::with_selection(&["mb"], Some("mb")));
    let tree = page();
    let root = render_root(&tree, &fx, None);
    let rows = flatten_all(std::slice::from_ref(&root));
    let mb = find(&rows, "mb");

    let action = mb.activate(ClickModifiers {
        meta: false,
        ctrl: true,
        shift: false,
    });
    let Action::ExplorerActivateWidget(activate) = action else {
        panic!("expected activation");
    };
    assert_eq!(activate.to_url, "/app/app/page-p1/edit#mb");
    assert!(activate.is_selected);
    assert!(activate.modifiers.is_multi_select());
    assert_eq!(activate.parent_modal_id.as_deref(), Some("m1"));
    assert_eq!(activate.widgets_in_step, vec!["mb", "m2", "icon"]);
}

#[test]
fn rename_emits_update_without_validation() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let root = render_root(&tree, &fx, None);

    let Some(Action::UpdateWidgetName {
        widget_id,
        new_name,
    }) = root.row.rename("")
    else {
        panic!("expected rename action");
    };
    assert_eq!(widget_id, "0");
    assert_eq!(new_name, "");
}

#[test]
fn keyword_match_range_is_case_insensitive() {
    let fx = Fixture::new(SelectionState::new());
    let tree = WidgetNode::new("0", "Main", WidgetType::CANVAS)
        .with_children(vec![WidgetNode::new("b", "SubmitButton", WidgetType::BUTTON)]);
    let root = render_root(&tree, &fx, Some("button"));
    assert_eq!(root.children[0].row.name_match, Some(6..12));
    assert_eq!(root.row.name_match, None);
}

#[test]
fn page_widgets_start_at_step_zero() {
    let fx = Fixture::new(SelectionState::new());
    let tree = page();
    let nodes = render_page_widgets(&tree, "p1", None, &fx.ctx());

    let ids: Vec<&str> = nodes.iter().map(|n| n.row.entity_id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w2", "m1"]);
    assert!(nodes.iter().all(|n| n.row.step == 0));
    assert_eq!(&*nodes[0].row.widgets_in_step, ["w1", "w2", "m1", "ic"]);
    assert!(Rc::ptr_eq(
        &nodes[0].row.widgets_in_step,
        &nodes[2].row.widgets_in_step
    ));
}

#[test]
fn rerender_with_same_selection_hits_memo() {
    let fx = Fixture::new(SelectionState::with_selection(&["w1"], Some("w1")));
    let tree = page();
    render_root(&tree, &fx, None);
    let misses = fx.memo.misses();
    render_root(&tree, &fx, None);
    assert_eq!(fx.memo.misses(), misses);
    assert_eq!(fx.memo.hits(), misses);
}
