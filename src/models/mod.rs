//! 数据模型层

pub mod application;
pub mod widget_tree;

pub use application::{ApplicationRecord, UpdateApplicationPayload, WorkspacePermissions};
pub use widget_tree::{PreorderIter, WidgetNode, WidgetType};
