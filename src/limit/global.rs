//! 全局权限存储
//!
//! 宿主应用在启动时初始化一次，之后通过模块级函数访问

use std::sync::{Arc, OnceLock};

use crate::core::error::{LimitError, LimitResult};
use crate::core::types::{ActionAddrMap, LimitMenuItem, RouteNode};
use crate::limit::store::LimitStore;

static GLOBAL_LIMIT_STORE: OnceLock<Arc<LimitStore>> = OnceLock::new();

/// 初始化全局权限存储
pub fn init_global_limit_store(store: LimitStore) -> LimitResult<()> {
    GLOBAL_LIMIT_STORE
        .set(Arc::new(store))
        .map_err(|_| LimitError::StoreAlreadyInitialized)?;
    log::info!("全局权限存储初始化完成");
    Ok(())
}

/// 获取全局权限存储
pub fn global_limit_store() -> LimitResult<Arc<LimitStore>> {
    GLOBAL_LIMIT_STORE
        .get()
        .cloned()
        .ok_or(LimitError::StoreNotInitialized)
}

/// 检查全局权限存储是否已初始化
pub fn is_global_limit_store_initialized() -> bool {
    GLOBAL_LIMIT_STORE.get().is_some()
}

/// 权限配置表
pub fn get_limit_menus(refresh: bool) -> LimitResult<Arc<Vec<LimitMenuItem>>> {
    Ok(global_limit_store()?.get_limit_menus(refresh))
}

/// 可用权限路由
pub fn get_auth_routes() -> LimitResult<Arc<Vec<RouteNode>>> {
    Ok(global_limit_store()?.get_auth_routes())
}

/// 侧边栏展示菜单
pub fn get_aside_menus() -> LimitResult<Arc<Vec<RouteNode>>> {
    Ok(global_limit_store()?.get_aside_menus())
}

/// 操作地址映射
pub fn get_action_addr_map() -> LimitResult<Arc<ActionAddrMap>> {
    Ok(global_limit_store()?.get_action_addr_map())
}

/// 清除路由缓存
pub fn invalidate_route_caches() -> LimitResult<()> {
    global_limit_store()?.invalidate_route_caches();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{LimitDef, LimitTable, PagePreset};
    use crate::limit::provider::{StaticAppLimits, StaticPresets, StaticRouteConfig};

    // OnceLock 无法重置，全局状态只在这一个测试里初始化
    #[test]
    fn test_global_limit_store_functions() {
        assert!(!is_global_limit_store_initialized());
        assert_eq!(get_limit_menus(false).unwrap_err(), LimitError::StoreNotInitialized);
        assert!(get_auth_routes().is_err());

        let routes = vec![RouteNode::new("/", "首页")
            .with_children(vec![RouteNode::new("/users", "用户")])];
        let limits: LimitTable = vec![("$page", LimitDef::new("浏览"))].into_iter().collect();
        let store = LimitStore::builder(Arc::new(StaticRouteConfig::new(routes)))
            .presets(Arc::new(
                StaticPresets::new().with_preset("/users", PagePreset::default().with_limits(limits)),
            ))
            .app_limits(Arc::new(StaticAppLimits::from_str_list("/users/$page")))
            .build()
            .expect("存储构建应该成功");

        init_global_limit_store(store).expect("全局存储初始化应该成功");
        assert!(is_global_limit_store_initialized());

        let again = LimitStore::builder(Arc::new(StaticRouteConfig::default()))
            .build()
            .expect("存储构建应该成功");
        assert_eq!(
            init_global_limit_store(again).unwrap_err(),
            LimitError::StoreAlreadyInitialized
        );

        let menus = get_limit_menus(false).expect("应该返回权限配置表");
        assert!(Arc::ptr_eq(&menus, &get_limit_menus(false).expect("应该返回缓存")));
        assert_eq!(get_auth_routes().expect("应该返回路由")[0].children.len(), 1);
        assert_eq!(get_aside_menus().expect("应该返回菜单").len(), 1);
        assert!(get_action_addr_map().expect("应该返回映射").is_empty());
        assert!(invalidate_route_caches().is_ok());
    }
}
