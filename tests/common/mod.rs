//! 集成测试共享工具模块
//!
//! 提供测试数据与断言辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::sync::Arc;

use route_limit::config::LimitConfig;
use route_limit::limit::{LimitStore, StaticAppLimits, StaticPresets, StaticRouteConfig};

/// 测试上下文，持有存储以及可替换的用户权限
pub struct TestContext {
    pub store: LimitStore,
    pub app_limits: Arc<StaticAppLimits>,
}

impl TestContext {
    /// 基于标准测试数据创建上下文
    pub fn new(limits: &str) -> Self {
        Self::with_config(limits, LimitConfig::default())
    }

    pub fn with_config(limits: &str, config: LimitConfig) -> Self {
        let app_limits = Arc::new(StaticAppLimits::from_str_list(limits));
        let routes = StaticRouteConfig::from_json(data_fixtures::ROUTES_JSON)
            .expect("路由测试数据解析失败");
        let presets = StaticPresets::from_json(data_fixtures::PRESETS_JSON)
            .expect("预设测试数据解析失败");

        let store = LimitStore::builder(Arc::new(routes))
            .presets(Arc::new(presets))
            .app_limits(app_limits.clone())
            .config(config)
            .build()
            .expect("存储构建失败");

        Self { store, app_limits }
    }
}
