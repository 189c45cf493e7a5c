//! 视图层模块
//!
//! - applications: 工作区应用卡片列表
//! - explorer: 组件实体浏览器（行派生 + 终端绘制）

pub mod applications;
pub mod explorer;

#[cfg(feature = "tui")]
pub use applications::CardListView;
pub use applications::{card_list, CardListElement, CardListProps};
#[cfg(feature = "tui")]
pub use explorer::ExplorerView;
pub use explorer::{render_page_widgets, EntityContext, EntityNode, EntityRow};
