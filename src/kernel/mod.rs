//! Headless application core (state/action/effect).

pub mod action;
pub mod effect;
pub mod services;
pub mod state;
pub mod store;

pub use action::{Action, ActivateWidget, ClickModifiers};
pub use effect::Effect;
pub use state::{
    AppState, ApplicationsState, CanvasState, ExplorerState, FocusTarget, InputDialogKind,
    InputDialogState, SelectionRequestType, SelectionState, UiState,
};
pub use store::{DispatchResult, Store};
