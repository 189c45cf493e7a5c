//! lowcode-explorer - 低代码编辑器的应用卡片列表与组件实体浏览器
//!
//! 模块结构：
//! - models: 数据模型（WidgetNode, ApplicationRecord）
//! - kernel: 无界面核心（State, Action, Effect, Store, services）
//! - views: 视图层（card_list, widget_entity, ExplorerView）
//! - app: 应用层（Workbench, UiTheme）
//! - tui: 终端集成（crossterm + ratatui）

#[cfg(feature = "tui")]
pub mod app;
pub mod kernel;
pub mod models;
#[cfg(feature = "tui")]
pub mod tui;
pub mod views;
