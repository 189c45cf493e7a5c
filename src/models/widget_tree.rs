//! Canvas structure: the widget tree the explorer renders.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Widget type name as reported by the canvas (`BUTTON_WIDGET`, `MODAL_WIDGET`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetType(CompactString);

impl WidgetType {
    pub const MODAL: &'static str = "MODAL_WIDGET";
    pub const ICON: &'static str = "ICON_WIDGET";
    pub const CANVAS: &'static str = "CANVAS_WIDGET";
    pub const CONTAINER: &'static str = "CONTAINER_WIDGET";
    pub const FORM: &'static str = "FORM_WIDGET";
    pub const TABS: &'static str = "TABS_WIDGET";
    pub const LIST: &'static str = "LIST_WIDGET_V2";
    pub const BUTTON: &'static str = "BUTTON_WIDGET";
    pub const TEXT: &'static str = "TEXT_WIDGET";
    pub const INPUT: &'static str = "INPUT_WIDGET_V2";
    pub const TABLE: &'static str = "TABLE_WIDGET_V2";
    pub const IMAGE: &'static str = "IMAGE_WIDGET";
    pub const CHART: &'static str = "CHART_WIDGET";
    pub const SELECT: &'static str = "SELECT_WIDGET";
    pub const CHECKBOX: &'static str = "CHECKBOX_WIDGET";

    pub fn new(name: impl AsRef<str>) -> Self {
        Self(CompactString::new(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_modal(&self) -> bool {
        self.0 == Self::MODAL
    }

    /// Human readable label: `TABLE_WIDGET_V2` -> `Table`.
    pub fn display_label(&self) -> String {
        let base = self.0.trim_end_matches(|c: char| c.is_ascii_digit());
        let base = base.strip_suffix("_V").unwrap_or(base);
        let base = base.strip_suffix("_WIDGET").unwrap_or(base);

        let mut out = String::with_capacity(base.len());
        for (i, word) in base.split('_').filter(|w| !w.is_empty()).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.extend(chars.map(|c| c.to_ascii_lowercase()));
            }
        }
        out
    }
}

impl From<&str> for WidgetType {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One node of the page canvas structure.
///
/// Depth and the enclosing modal are not stored here; the explorer traversal
/// carries them down as it walks the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetNode {
    pub widget_id: String,
    pub widget_name: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<WidgetNode>>,
}

impl WidgetNode {
    pub fn new(
        widget_id: impl Into<String>,
        widget_name: impl Into<String>,
        widget_type: impl Into<WidgetType>,
    ) -> Self {
        Self {
            widget_id: widget_id.into(),
            widget_name: widget_name.into(),
            widget_type: widget_type.into(),
            children: None,
        }
    }

    pub fn with_children(mut self, children: Vec<WidgetNode>) -> Self {
        self.children = Some(children);
        self
    }

    pub fn children(&self) -> &[WidgetNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    pub fn has_children(&self) -> bool {
        !self.children().is_empty()
    }

    pub fn iter_preorder(&self) -> PreorderIter<'_> {
        PreorderIter { stack: vec![self] }
    }

    pub fn find(&self, widget_id: &str) -> Option<&WidgetNode> {
        self.iter_preorder().find(|n| n.widget_id == widget_id)
    }

    fn find_mut(&mut self, widget_id: &str) -> Option<&mut WidgetNode> {
        if self.widget_id == widget_id {
            return Some(self);
        }
        self.children
            .as_mut()?
            .iter_mut()
            .find_map(|child| child.find_mut(widget_id))
    }

    /// Renames `widget_id`; returns `false` when the id is not in the tree.
    pub fn rename(&mut self, widget_id: &str, new_name: &str) -> bool {
        match self.find_mut(widget_id) {
            Some(node) => {
                node.widget_name = new_name.to_string();
                true
            }
            None => false,
        }
    }

    /// Ids from the root down to the parent of `widget_id` (excluding the widget itself).
    pub fn ancestors_of(&self, widget_id: &str) -> Option<Vec<String>> {
        let mut path = Vec::new();
        if self.collect_path(widget_id, &mut path) {
            path.pop();
            Some(path)
        } else {
            None
        }
    }

    fn collect_path(&self, widget_id: &str, path: &mut Vec<String>) -> bool {
        path.push(self.widget_id.clone());
        if self.widget_id == widget_id {
            return true;
        }
        for child in self.children() {
            if child.collect_path(widget_id, path) {
                return true;
            }
        }
        path.pop();
        false
    }
}

pub struct PreorderIter<'a> {
    stack: Vec<&'a WidgetNode>,
}

impl<'a> Iterator for PreorderIter<'a> {
    type Item = &'a WidgetNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        for child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/widget_tree.rs"]
mod tests;
