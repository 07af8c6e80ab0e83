//! 派生状态存储
//!
//! 缓存权限配置表、有权限的路由、侧边栏菜单以及操作地址映射。
//! 每个槽位为 `None` 时表示需要重新计算；计算结果为空时不视为已缓存。

use log::{debug, info};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::LimitConfig;
use crate::core::error::LimitResult;
use crate::core::types::{ActionAddrMap, LimitMenuItem, RouteNode};
use crate::limit::checker::{LimitChecker, PageLimitChecker};
use crate::limit::filter::{filter_routes, RouteFilterMode};
use crate::limit::menu::{build_limit_menus, LimitMenus};
use crate::limit::provider::{
    AppLimitsProvider, PagePresetProvider, RouteConfigProvider, StaticAppLimits, StaticPresets,
};
use crate::limit::stats::{StoreStats, StoreStatsCollector};

type RouteSlot = RwLock<Option<Arc<Vec<RouteNode>>>>;

/// 权限模型派生状态存储
///
/// 重新计算时持有对应槽位的写锁并调用协作方，协作方不能回调本存储
pub struct LimitStore {
    route_config: Arc<dyn RouteConfigProvider>,
    presets: Arc<dyn PagePresetProvider>,
    checker: Arc<dyn LimitChecker>,
    app_limits: Arc<dyn AppLimitsProvider>,
    config: LimitConfig,

    limit_menus: RwLock<Option<Arc<Vec<LimitMenuItem>>>>,
    action_addr_map: RwLock<Arc<ActionAddrMap>>,
    auth_routes: RouteSlot,
    aside_menus: RouteSlot,

    stats: StoreStatsCollector,
}

impl LimitStore {
    pub fn builder(route_config: Arc<dyn RouteConfigProvider>) -> LimitStoreBuilder {
        LimitStoreBuilder::new(route_config)
    }

    pub fn config(&self) -> &LimitConfig {
        &self.config
    }

    /// 权限配置表
    ///
    /// `refresh` 为 true 时重新构建，并整体替换权限配置表与操作地址映射
    pub fn get_limit_menus(&self, refresh: bool) -> Arc<Vec<LimitMenuItem>> {
        if !refresh {
            if let Some(menus) = self.limit_menus.read().as_ref() {
                self.stats.record_hit();
                return menus.clone();
            }
        }

        let mut slot = self.limit_menus.write();
        if !refresh {
            if let Some(menus) = slot.as_ref() {
                self.stats.record_hit();
                return menus.clone();
            }
        }

        if refresh {
            self.stats.record_refresh();
        } else {
            self.stats.record_miss();
        }

        let routes = self.route_config.route_config(false);
        let LimitMenus {
            menus,
            action_addr_map,
        } = build_limit_menus(&routes, self.presets.as_ref(), &self.config);

        let menus = Arc::new(menus);
        *self.action_addr_map.write() = Arc::new(action_addr_map);
        *slot = if menus.is_empty() {
            None
        } else {
            Some(menus.clone())
        };
        menus
    }

    /// 当前用户有权限的路由
    pub fn get_auth_routes(&self) -> Arc<Vec<RouteNode>> {
        self.cached_routes(&self.auth_routes, RouteFilterMode::Route)
    }

    /// 侧边栏展示菜单
    pub fn get_aside_menus(&self) -> Arc<Vec<RouteNode>> {
        self.cached_routes(&self.aside_menus, RouteFilterMode::Aside)
    }

    /// 最近一次构建权限配置表时得到的操作地址映射
    pub fn get_action_addr_map(&self) -> Arc<ActionAddrMap> {
        self.action_addr_map.read().clone()
    }

    /// 清除有权限路由与侧边栏缓存，用户登录或权限变更后调用
    pub fn invalidate_route_caches(&self) {
        *self.auth_routes.write() = None;
        *self.aside_menus.write() = None;
        self.stats.record_invalidation();
        info!("路由缓存已清除");
    }

    /// 清除全部缓存
    pub fn invalidate_all(&self) {
        *self.limit_menus.write() = None;
        *self.action_addr_map.write() = Arc::new(ActionAddrMap::new());
        *self.auth_routes.write() = None;
        *self.aside_menus.write() = None;
        self.stats.record_invalidation();
        info!("权限存储缓存已全部清除");
    }

    pub fn stats(&self) -> StoreStats {
        self.stats.snapshot()
    }

    fn cached_routes(&self, slot: &RouteSlot, mode: RouteFilterMode) -> Arc<Vec<RouteNode>> {
        if let Some(routes) = slot.read().as_ref() {
            self.stats.record_hit();
            return routes.clone();
        }

        let mut slot = slot.write();
        if let Some(routes) = slot.as_ref() {
            self.stats.record_hit();
            return routes.clone();
        }
        self.stats.record_miss();

        let limits = self.app_limits.app_limits();
        let routes = self.route_config.route_config(true);
        let filtered = Arc::new(filter_routes(
            &routes,
            &limits,
            self.checker.as_ref(),
            mode,
        ));

        if filtered.is_empty() {
            debug!("{} 过滤结果为空, 不写入缓存", mode);
        } else {
            *slot = Some(filtered.clone());
        }
        filtered
    }
}

impl std::fmt::Debug for LimitStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LimitStore")
            .field("config", &self.config)
            .field("limit_menus_cached", &self.limit_menus.read().is_some())
            .field("auth_routes_cached", &self.auth_routes.read().is_some())
            .field("aside_menus_cached", &self.aside_menus.read().is_some())
            .field("stats", &self.stats)
            .finish()
    }
}

/// 权限存储构建器
pub struct LimitStoreBuilder {
    route_config: Arc<dyn RouteConfigProvider>,
    presets: Option<Arc<dyn PagePresetProvider>>,
    checker: Option<Arc<dyn LimitChecker>>,
    app_limits: Option<Arc<dyn AppLimitsProvider>>,
    config: LimitConfig,
}

impl LimitStoreBuilder {
    pub fn new(route_config: Arc<dyn RouteConfigProvider>) -> Self {
        Self {
            route_config,
            presets: None,
            checker: None,
            app_limits: None,
            config: LimitConfig::default(),
        }
    }

    pub fn presets(mut self, presets: Arc<dyn PagePresetProvider>) -> Self {
        self.presets = Some(presets);
        self
    }

    pub fn checker(mut self, checker: Arc<dyn LimitChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn app_limits(mut self, app_limits: Arc<dyn AppLimitsProvider>) -> Self {
        self.app_limits = Some(app_limits);
        self
    }

    pub fn config(mut self, config: LimitConfig) -> Self {
        self.config = config;
        self
    }

    /// 未指定的协作方使用缺省实现：空预设、默认检查器、空用户权限
    pub fn build(self) -> LimitResult<LimitStore> {
        self.config.validate()?;

        let checker = self.checker.unwrap_or_else(|| {
            Arc::new(PageLimitChecker::new(self.config.route_limit_key.clone()))
        });

        Ok(LimitStore {
            route_config: self.route_config,
            presets: self
                .presets
                .unwrap_or_else(|| Arc::new(StaticPresets::new())),
            checker,
            app_limits: self
                .app_limits
                .unwrap_or_else(|| Arc::new(StaticAppLimits::default())),
            config: self.config,
            limit_menus: RwLock::new(None),
            action_addr_map: RwLock::new(Arc::new(ActionAddrMap::new())),
            auth_routes: RwLock::new(None),
            aside_menus: RwLock::new(None),
            stats: StoreStatsCollector::new(),
        })
    }
}
