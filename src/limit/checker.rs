//! 节点访问权限检查

use crate::core::constants::ROUTE_LIMIT_KEY;
use crate::core::types::AppLimits;

/// 根据节点路径与用户权限判断是否可访问
pub trait LimitChecker: Send + Sync {
    fn check_limit_by_node_path(&self, node_path: &str, limits: &AppLimits) -> bool;
}

impl<F> LimitChecker for F
where
    F: Fn(&str, &AppLimits) -> bool + Send + Sync,
{
    fn check_limit_by_node_path(&self, node_path: &str, limits: &AppLimits) -> bool {
        self(node_path, limits)
    }
}

/// 默认检查器
///
/// 用户拥有 `${nodePath}/${pageKey}`，或拥有该节点下任意权限时放行。
/// 子页面有权限时分组节点也会保留。
#[derive(Debug, Clone)]
pub struct PageLimitChecker {
    route_limit_key: String,
}

impl PageLimitChecker {
    pub fn new(route_limit_key: impl Into<String>) -> Self {
        Self {
            route_limit_key: route_limit_key.into(),
        }
    }
}

impl Default for PageLimitChecker {
    fn default() -> Self {
        Self::new(ROUTE_LIMIT_KEY)
    }
}

impl LimitChecker for PageLimitChecker {
    fn check_limit_by_node_path(&self, node_path: &str, limits: &AppLimits) -> bool {
        let page_limit = format!("{}/{}", node_path, self.route_limit_key);
        if limits.contains(&page_limit) {
            return true;
        }

        let prefix = format!("{}/", node_path.trim_end_matches('/'));
        limits.iter().any(|limit| limit.starts_with(&prefix))
    }
}
