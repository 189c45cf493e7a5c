//! Widget rows of the entity explorer.
//!
//! The explorer is a single top-down traversal of the canvas structure. Each
//! call renders one row from the node, its inherited context and the shared
//! selection state, then recurses into the children with `step + 1`.

use std::ops::Range;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::kernel::services::ports::{EntityIcon, RouteBuilder, WidgetRegistry};
use crate::kernel::{Action, ActivateWidget, ClickModifiers, SelectionState};
use crate::models::{WidgetNode, WidgetType};

use super::selection::{SelectionFlags, SelectionFlagsCache};

/// Inputs of one explorer row.
#[derive(Debug, Clone)]
pub struct WidgetEntityProps<'a> {
    pub widget_id: &'a str,
    pub widget_name: &'a str,
    pub widget_type: &'a WidgetType,
    pub step: u16,
    pub page_id: &'a str,
    pub child_widgets: Option<&'a [WidgetNode]>,
    pub parent_modal_id: Option<&'a str>,
    pub search_keyword: Option<&'a str>,
    pub is_default_expanded: bool,
    /// Ids of this widget and its siblings, shared by the whole step.
    pub widgets_in_step: Rc<[String]>,
}

impl<'a> WidgetEntityProps<'a> {
    pub fn from_node(node: &'a WidgetNode, page_id: &'a str, widgets_in_step: Rc<[String]>) -> Self {
        Self {
            widget_id: &node.widget_id,
            widget_name: &node.widget_name,
            widget_type: &node.widget_type,
            step: 0,
            page_id,
            child_widgets: node.children.as_deref(),
            parent_modal_id: None,
            search_keyword: None,
            is_default_expanded: false,
            widgets_in_step,
        }
    }
}

/// Read-only collaborators shared by every row of one render pass.
pub struct EntityContext<'a> {
    pub selection: &'a SelectionState,
    pub registry: &'a WidgetRegistry,
    pub routes: &'a dyn RouteBuilder,
    pub can_manage_pages: bool,
    pub toggled: &'a FxHashSet<String>,
    pub memo: &'a SelectionFlagsCache,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetContextMenu {
    pub widget_id: String,
    pub page_id: String,
    pub can_manage_pages: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRow {
    pub entity_id: String,
    pub name: String,
    pub widget_type: WidgetType,
    pub step: u16,
    pub page_id: String,
    pub icon: EntityIcon,
    pub active: bool,
    pub highlight: bool,
    pub context_menu: Option<WidgetContextMenu>,
    pub can_edit_entity_name: bool,
    pub show_add_button: bool,
    pub is_default_expanded: bool,
    pub force_expand: bool,
    /// Starting expansion after applying the user's toggle.
    pub expanded: bool,
    pub has_children: bool,
    pub search_keyword: Option<String>,
    pub name_match: Option<Range<usize>>,
    pub parent_modal_id: Option<String>,
    pub widgets_in_step: Rc<[String]>,
    pub to_url: String,
}

impl EntityRow {
    /// Action for a click on this row.
    pub fn activate(&self, modifiers: ClickModifiers) -> Action {
        Action::ExplorerActivateWidget(ActivateWidget {
            widget_id: self.entity_id.clone(),
            widget_type: self.widget_type.clone(),
            widget_name: self.name.clone(),
            page_id: self.page_id.clone(),
            to_url: self.to_url.clone(),
            is_selected: self.active,
            parent_modal_id: self.parent_modal_id.clone(),
            widgets_in_step: self.widgets_in_step.to_vec(),
            modifiers,
        })
    }

    /// Rename request; the name is neither validated nor echoed locally.
    pub fn rename(&self, new_name: impl Into<String>) -> Option<Action> {
        self.can_edit_entity_name.then(|| Action::UpdateWidgetName {
            widget_id: self.entity_id.clone(),
            new_name: new_name.into(),
        })
    }

    pub fn toggle(&self) -> Option<Action> {
        self.has_children.then(|| Action::ExplorerToggleExpand {
            widget_id: self.entity_id.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityNode {
    pub row: EntityRow,
    pub children: Vec<EntityNode>,
}

/// Renders one widget and its subtree, or nothing for types hidden from the explorer.
pub fn widget_entity(props: &WidgetEntityProps<'_>, ctx: &EntityContext<'_>) -> Option<EntityNode> {
    if !ctx.registry.is_renderable_in_explorer(props.widget_type) {
        tracing::trace!(widget_id = props.widget_id, widget_type = %props.widget_type, "hidden from explorer");
        return None;
    }

    let flags: SelectionFlags =
        ctx.memo
            .flags(props.widget_id, props.widget_type, props.page_id, ctx.selection);

    let children = props.child_widgets.unwrap_or(&[]);
    let has_children = !children.is_empty();
    let keyword = props.search_keyword.filter(|k| !k.is_empty());

    let is_default_expanded = (keyword.is_some() && has_children) || props.is_default_expanded;
    let force_expand = ctx.selection.should_force_expand(props.widget_id);
    let starts_expanded = is_default_expanded || force_expand;
    let expanded = starts_expanded != ctx.toggled.contains(props.widget_id);

    let context_menu = flags.show_context_menu().then(|| WidgetContextMenu {
        widget_id: props.widget_id.to_string(),
        page_id: props.page_id.to_string(),
        can_manage_pages: ctx.can_manage_pages,
    });

    let row = EntityRow {
        entity_id: props.widget_id.to_string(),
        name: props.widget_name.to_string(),
        widget_type: props.widget_type.clone(),
        step: props.step,
        page_id: props.page_id.to_string(),
        icon: ctx.registry.icon_for(props.widget_type),
        active: flags.is_selected,
        highlight: flags.highlighted,
        context_menu,
        can_edit_entity_name: ctx.can_manage_pages,
        show_add_button: ctx.can_manage_pages,
        is_default_expanded,
        force_expand,
        expanded,
        has_children,
        search_keyword: keyword.map(str::to_string),
        name_match: keyword.and_then(|k| find_ignore_ascii_case(props.widget_name, k)),
        parent_modal_id: props.parent_modal_id.map(str::to_string),
        widgets_in_step: Rc::clone(&props.widgets_in_step),
        to_url: ctx
            .routes
            .builder_url(props.page_id, Some(props.widget_id)),
    };

    let parent_modal_id_for_children = if props.widget_type.is_modal() {
        Some(props.widget_id)
    } else {
        props.parent_modal_id
    };
    let child_ids: Rc<[String]> = children.iter().map(|c| c.widget_id.clone()).collect();

    let children = children
        .iter()
        .filter_map(|child| {
            let child_props = WidgetEntityProps {
                widget_id: &child.widget_id,
                widget_name: &child.widget_name,
                widget_type: &child.widget_type,
                step: props.step + 1,
                page_id: props.page_id,
                child_widgets: child.children.as_deref(),
                parent_modal_id: parent_modal_id_for_children,
                search_keyword: props.search_keyword,
                is_default_expanded: false,
                widgets_in_step: Rc::clone(&child_ids),
            };
            widget_entity(&child_props, ctx)
        })
        .collect();

    Some(EntityNode { row, children })
}

/// Renders the widgets of a page: the children of the main canvas, at step 0.
pub fn render_page_widgets(
    canvas: &WidgetNode,
    page_id: &str,
    search_keyword: Option<&str>,
    ctx: &EntityContext<'_>,
) -> Vec<EntityNode> {
    let top_level: Rc<[String]> = canvas
        .children()
        .iter()
        .map(|c| c.widget_id.clone())
        .collect();

    canvas
        .children()
        .iter()
        .filter_map(|node| {
            let props = WidgetEntityProps {
                search_keyword,
                ..WidgetEntityProps::from_node(node, page_id, Rc::clone(&top_level))
            };
            widget_entity(&props, ctx)
        })
        .collect()
}

/// Every rendered row in document (pre-)order.
pub fn flatten_all(nodes: &[EntityNode]) -> Vec<&EntityRow> {
    let mut rows = Vec::new();
    for node in nodes {
        collect_rows(node, false, &mut rows);
    }
    rows
}

/// Rows currently on screen: children of collapsed rows are skipped.
pub fn flatten_visible(nodes: &[EntityNode]) -> Vec<&EntityRow> {
    let mut rows = Vec::new();
    for node in nodes {
        collect_rows(node, true, &mut rows);
    }
    rows
}

fn collect_rows<'a>(node: &'a EntityNode, only_expanded: bool, out: &mut Vec<&'a EntityRow>) {
    out.push(&node.row);
    if only_expanded && !node.row.expanded {
        return;
    }
    for child in &node.children {
        collect_rows(child, only_expanded, out);
    }
}

fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .char_indices()
        .map(|(i, _)| i)
        .find(|&i| {
            haystack
                .get(i..i + needle.len())
                .is_some_and(|s| s.eq_ignore_ascii_case(needle))
        })
        .map(|start| start..start + needle.len())
}

#[cfg(test)]
#[path = "../../../tests/unit/views/explorer/widget_entity.rs"]
mod tests;
