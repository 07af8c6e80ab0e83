//! APP 权限配置表处理
//!
//! 提供：
//! - needs 依赖解析
//! - 权限配置表与操作地址映射构建
//! - 有权限路由与侧边栏菜单过滤
//! - 派生状态存储与全局实例

pub mod action;
pub mod checker;
pub mod filter;
pub mod global;
pub mod menu;
pub mod needs;
pub mod provider;
pub mod stats;
pub mod store;

pub use action::{build_action_addr, parse_action_addr};
pub use checker::{LimitChecker, PageLimitChecker};
pub use filter::{filter_routes, RouteFilterMode};
pub use global::{
    get_action_addr_map, get_aside_menus, get_auth_routes, get_limit_menus,
    global_limit_store, init_global_limit_store, invalidate_route_caches,
    is_global_limit_store_initialized,
};
pub use menu::{build_limit_menus, LimitMenuBuilder, LimitMenus};
pub use needs::resolve_limit_needs;
pub use provider::{
    parse_app_limits, AppLimitsProvider, PagePresetProvider, RouteConfigProvider,
    StaticAppLimits, StaticPresets, StaticRouteConfig,
};
pub use stats::{StoreStats, StoreStatsCollector};
pub use store::{LimitStore, LimitStoreBuilder};
