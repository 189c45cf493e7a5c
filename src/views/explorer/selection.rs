//! Per-row selection flags, memoized against the selection generation.

use crate::kernel::SelectionState;
use crate::models::WidgetType;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionFlags {
    pub is_selected: bool,
    pub highlighted: bool,
    pub multiple_selected: bool,
}

impl SelectionFlags {
    pub fn derive(widget_id: &str, selection: &SelectionState) -> Self {
        Self {
            is_selected: selection.is_selected(widget_id),
            highlighted: selection.last_selected_widget() == Some(widget_id),
            multiple_selected: selection.multiple_selected(),
        }
    }

    /// Single-target context actions are hidden while several widgets are selected.
    pub fn show_context_menu(self) -> bool {
        !self.multiple_selected
    }
}

#[derive(Debug, Clone)]
struct CachedFlags {
    widget_type: WidgetType,
    page_id: String,
    flags: SelectionFlags,
}

/// Memo of [`SelectionFlags`] keyed by widget id, checked against type and page.
///
/// Entries live for one selection generation: the first lookup under a new
/// generation drops everything computed for the previous one. Use one cache
/// per selection state.
#[derive(Debug, Default)]
pub struct SelectionFlagsCache {
    entries: RefCell<FxHashMap<String, CachedFlags>>,
    generation: Cell<Option<u64>>,
    hits: Cell<usize>,
    misses: Cell<usize>,
}

impl SelectionFlagsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(
        &self,
        widget_id: &str,
        widget_type: &WidgetType,
        page_id: &str,
        selection: &SelectionState,
    ) -> SelectionFlags {
        let generation = selection.generation();
        if self.generation.get() != Some(generation) {
            self.clear();
            self.generation.set(Some(generation));
        }

        if let Some(cached) = self.entries.borrow().get(widget_id) {
            if cached.widget_type == *widget_type && cached.page_id == page_id {
                self.hits.set(self.hits.get() + 1);
                return cached.flags;
            }
        }

        let flags = SelectionFlags::derive(widget_id, selection);
        self.misses.set(self.misses.get() + 1);
        self.entries.borrow_mut().insert(
            widget_id.to_string(),
            CachedFlags {
                widget_type: widget_type.clone(),
                page_id: page_id.to_string(),
                flags,
            },
        );
        flags
    }

    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    pub fn misses(&self) -> usize {
        self.misses.get()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
