//! Widget capability table: type -> how the explorer treats it.

use crate::models::WidgetType;
use rustc_hash::FxHashMap;

/// Glyph registered for a widget type.
pub type IconGlyph = &'static str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetCapability {
    pub icon: Option<IconGlyph>,
    pub renderable_in_explorer: bool,
}

impl WidgetCapability {
    pub const fn with_icon(icon: IconGlyph) -> Self {
        Self {
            icon: Some(icon),
            renderable_in_explorer: true,
        }
    }

    pub const fn hidden() -> Self {
        Self {
            icon: None,
            renderable_in_explorer: false,
        }
    }
}

impl Default for WidgetCapability {
    fn default() -> Self {
        Self {
            icon: None,
            renderable_in_explorer: true,
        }
    }
}

/// Icon resolved for one explorer row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityIcon {
    Registered(IconGlyph),
    /// No icon registered; the generic icon keyed by type.
    Fallback(WidgetType),
}

impl EntityIcon {
    pub fn glyph(&self) -> &str {
        match self {
            EntityIcon::Registered(glyph) => glyph,
            EntityIcon::Fallback(_) => "◇",
        }
    }
}

const BUILTIN_CAPABILITIES: &[(&str, WidgetCapability)] = &[
    (WidgetType::ICON, WidgetCapability::hidden()),
    (WidgetType::MODAL, WidgetCapability::with_icon("▣")),
    (WidgetType::CANVAS, WidgetCapability::with_icon("▭")),
    (WidgetType::CONTAINER, WidgetCapability::with_icon("□")),
    (WidgetType::FORM, WidgetCapability::with_icon("☰")),
    (WidgetType::TABS, WidgetCapability::with_icon("⊟")),
    (WidgetType::LIST, WidgetCapability::with_icon("≣")),
    (WidgetType::BUTTON, WidgetCapability::with_icon("⏺")),
    (WidgetType::TEXT, WidgetCapability::with_icon("T")),
    (WidgetType::INPUT, WidgetCapability::with_icon("⌶")),
    (WidgetType::TABLE, WidgetCapability::with_icon("⊞")),
    (WidgetType::IMAGE, WidgetCapability::with_icon("▨")),
    (WidgetType::CHART, WidgetCapability::with_icon("▥")),
    (WidgetType::SELECT, WidgetCapability::with_icon("▾")),
    (WidgetType::CHECKBOX, WidgetCapability::with_icon("☑")),
];

/// Lookup table from widget type to capability.
///
/// Unknown types are renderable and resolve to the fallback icon, so adding a
/// widget type only needs a new table entry.
#[derive(Debug, Clone)]
pub struct WidgetRegistry {
    capabilities: FxHashMap<WidgetType, WidgetCapability>,
}

impl WidgetRegistry {
    pub fn empty() -> Self {
        Self {
            capabilities: FxHashMap::default(),
        }
    }

    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for (ty, cap) in BUILTIN_CAPABILITIES {
            registry.register(WidgetType::new(ty), *cap);
        }
        registry
    }

    pub fn register(&mut self, ty: WidgetType, capability: WidgetCapability) {
        self.capabilities.insert(ty, capability);
    }

    /// Marks `ty` as structural-only; its rows and subtrees are not shown.
    pub fn hide(&mut self, ty: WidgetType) {
        self.capabilities
            .entry(ty)
            .and_modify(|cap| cap.renderable_in_explorer = false)
            .or_insert_with(WidgetCapability::hidden);
    }

    pub fn capability(&self, ty: &WidgetType) -> WidgetCapability {
        self.capabilities.get(ty).copied().unwrap_or_default()
    }

    pub fn is_renderable_in_explorer(&self, ty: &WidgetType) -> bool {
        self.capability(ty).renderable_in_explorer
    }

    pub fn icon_for(&self, ty: &WidgetType) -> EntityIcon {
        match self.capability(ty).icon {
            Some(glyph) => EntityIcon::Registered(glyph),
            None => EntityIcon::Fallback(ty.clone()),
        }
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
