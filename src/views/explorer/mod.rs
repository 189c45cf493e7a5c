//! Entity explorer: widget rows and their terminal painter.

#[cfg(feature = "tui")]
mod explorer_view;
pub mod selection;
pub mod widget_entity;

#[cfg(feature = "tui")]
pub use explorer_view::ExplorerView;
pub use selection::{SelectionFlags, SelectionFlagsCache};
pub use widget_entity::{
    flatten_all, flatten_visible, render_page_widgets, widget_entity, EntityContext, EntityNode,
    EntityRow, WidgetContextMenu, WidgetEntityProps,
};
