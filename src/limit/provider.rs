//! 外部协作方接口
//!
//! 路由配置、页面预设、权限检查与当前用户权限都由宿主应用提供。
//! 这里给出 trait 以及基于静态数据的实现，便于嵌入和测试。
//!
//! `LimitStore` 在持有槽位写锁期间调用这些方法，锁不可重入。
//! 实现中不能回调同一个存储（包括全局存储的模块级函数），否则会死锁。

use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::error::{LimitError, LimitResult};
use crate::core::types::{AppLimits, PagePreset, RouteNode};

/// 路由配置提供者
///
/// 在存储的写锁内调用，实现中不能回调存储
pub trait RouteConfigProvider: Send + Sync {
    /// 获取路由森林；`include_hidden` 为 true 时包含所有节点
    fn route_config(&self, include_hidden: bool) -> Vec<RouteNode>;
}

/// 页面预设提供者
///
/// 在存储的写锁内调用，实现中不能回调存储
pub trait PagePresetProvider: Send + Sync {
    fn page_preset(&self, node: &RouteNode) -> Option<PagePreset>;
}

/// 当前用户权限提供者
///
/// 在存储的写锁内调用，实现中不能回调存储
pub trait AppLimitsProvider: Send + Sync {
    fn app_limits(&self) -> AppLimits;
}

/// 解析逗号拼接的权限字符串
pub fn parse_app_limits(raw: &str) -> AppLimits {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 静态路由配置
#[derive(Debug, Clone, Default)]
pub struct StaticRouteConfig {
    routes: Vec<RouteNode>,
}

impl StaticRouteConfig {
    pub fn new(routes: Vec<RouteNode>) -> Self {
        Self { routes }
    }

    pub fn from_json(json: &str) -> LimitResult<Self> {
        Ok(Self::new(RouteNode::forest_from_json(json)?))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> LimitResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }
}

impl RouteConfigProvider for StaticRouteConfig {
    fn route_config(&self, _include_hidden: bool) -> Vec<RouteNode> {
        self.routes.clone()
    }
}

/// 静态页面预设，按节点路径索引
#[derive(Debug, Clone, Default)]
pub struct StaticPresets {
    presets: HashMap<String, PagePreset>,
}

impl StaticPresets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preset(mut self, node_path: impl Into<String>, preset: PagePreset) -> Self {
        self.presets.insert(node_path.into(), preset);
        self
    }

    pub fn insert(&mut self, node_path: impl Into<String>, preset: PagePreset) {
        self.presets.insert(node_path.into(), preset);
    }

    /// 从 `{ nodePath: preset }` 形式的 JSON 解析
    pub fn from_json(json: &str) -> LimitResult<Self> {
        let presets: HashMap<String, PagePreset> =
            serde_json::from_str(json).map_err(|e| LimitError::invalid_preset(e.to_string()))?;
        Ok(Self { presets })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> LimitResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl PagePresetProvider for StaticPresets {
    fn page_preset(&self, node: &RouteNode) -> Option<PagePreset> {
        self.presets.get(&node.node_path).cloned()
    }
}

/// 可替换的静态用户权限，登录或权限变更时调用 `set`
#[derive(Debug, Default)]
pub struct StaticAppLimits {
    limits: RwLock<AppLimits>,
}

impl StaticAppLimits {
    pub fn new(limits: AppLimits) -> Self {
        Self {
            limits: RwLock::new(limits),
        }
    }

    pub fn from_str_list(raw: &str) -> Self {
        Self::new(parse_app_limits(raw))
    }

    pub fn set(&self, limits: AppLimits) {
        *self.limits.write() = limits;
    }

    pub fn clear(&self) {
        self.limits.write().clear();
    }
}

impl AppLimitsProvider for StaticAppLimits {
    fn app_limits(&self) -> AppLimits {
        self.limits.read().clone()
    }
}
