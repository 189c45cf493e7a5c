//! Workspace application cards.

pub mod card_list;
#[cfg(feature = "tui")]
mod card_list_view;

pub use card_list::{
    card_list, ApplicationCard, CardListElement, CardListProps, CardMenuItem, EmptyState,
    DEFAULT_EMPTY_STATE_MESSAGE,
};
#[cfg(feature = "tui")]
pub use card_list_view::CardListView;
