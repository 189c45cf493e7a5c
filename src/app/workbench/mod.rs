//! 工作台：组件浏览器 + 应用卡片列表，统一管理视图和输入分发

use super::theme::UiTheme;
use crate::kernel::services::adapters::{registry_from_settings, DispatchNavigator, InMemoryBackend};
use crate::kernel::services::ports::{
    has_manage_page_permission, AnalyticsSink, AssetConfig, BuilderRoutes, FeatureFlags,
    Settings, WidgetRegistry,
};
use crate::kernel::{AppState, FocusTarget, Store};
use crate::views::applications::{card_list, CardListElement, CardListProps};
use crate::views::explorer::{render_page_widgets, EntityContext, EntityNode, SelectionFlagsCache};
use crate::views::{CardListView, ExplorerView};

mod bridge;
mod input;
mod render;

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;
const EXPLORER_WIDTH_PERCENT: u16 = 40;
const EXPLORER_MIN_WIDTH: u16 = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

pub struct Workbench {
    store: Store,
    registry: WidgetRegistry,
    routes: BuilderRoutes,
    memo: SelectionFlagsCache,
    navigator: DispatchNavigator<BuilderRoutes>,
    analytics: Box<dyn AnalyticsSink>,
    backend: InMemoryBackend,
    assets: AssetConfig,
    theme: UiTheme,
    explorer: ExplorerView,
    cards: CardListView,
}

impl Workbench {
    pub fn new(mut state: AppState, settings: &Settings, analytics: Box<dyn AnalyticsSink>) -> Self {
        state.feature_flags =
            FeatureFlags::from_names(settings.feature_flags.iter().map(String::as_str));
        let routes = BuilderRoutes::new(settings.app_slug.clone());

        let mut workbench = Self {
            store: Store::new(state),
            registry: registry_from_settings(settings),
            navigator: DispatchNavigator::new(routes.clone()),
            routes,
            memo: SelectionFlagsCache::new(),
            analytics,
            backend: InMemoryBackend::new(),
            assets: settings.assets.clone(),
            theme: UiTheme::from_settings(&settings.theme),
            explorer: ExplorerView::new(settings.explorer.indent_width),
            cards: CardListView::new(),
        };
        workbench.sync_visible_rows();
        workbench
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn focus(&self) -> FocusTarget {
        self.store.state().ui.focus
    }

    pub fn memo(&self) -> &SelectionFlagsCache {
        &self.memo
    }

    pub fn can_manage_pages(&self) -> bool {
        let state = self.store.state();
        has_manage_page_permission(state.gac_enabled(), &state.explorer.page_permissions)
    }

    /// Explorer rows for the current page, derived from the store.
    pub fn entity_tree(&self) -> Vec<EntityNode> {
        let state = self.store.state();
        let ctx = EntityContext {
            selection: &state.selection,
            registry: &self.registry,
            routes: &self.routes,
            can_manage_pages: self.can_manage_pages(),
            toggled: &state.explorer.toggled,
            memo: &self.memo,
        };
        render_page_widgets(
            &state.canvas.tree,
            &state.explorer.page_id,
            state.explorer.search_keyword(),
            &ctx,
        )
    }

    pub fn card_list_element(&self) -> CardListElement {
        let apps = &self.store.state().applications;
        card_list(
            &CardListProps::from_state(apps),
            apps.is_fetching_applications,
            &self.assets,
        )
    }
}
