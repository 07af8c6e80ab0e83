//! 路由配置过滤
//!
//! 1. 去除无权限路由
//! 2. 侧边栏模式下再去除隐藏菜单项

use log::{debug, warn};
use std::fmt;

use crate::core::tree::filter_tree;
use crate::core::types::{AppLimits, RouteNode};
use crate::limit::checker::LimitChecker;

/// 过滤模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteFilterMode {
    /// 所有有权限的路由
    Route,
    /// 侧边栏展示的菜单
    Aside,
}

impl fmt::Display for RouteFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteFilterMode::Route => write!(f, "route"),
            RouteFilterMode::Aside => write!(f, "aside"),
        }
    }
}

/// 按用户权限过滤路由森林
///
/// 用户没有任何权限时直接返回空结果。根节点始终保留；侧边栏模式下，
/// 过滤后没有子节点的顶层根节点会被去掉。
pub fn filter_routes(
    routes: &[RouteNode],
    limits: &AppLimits,
    checker: &dyn LimitChecker,
    mode: RouteFilterMode,
) -> Vec<RouteNode> {
    if limits.is_empty() {
        warn!("当前用户没有任何权限, {} 过滤结果为空", mode);
        return Vec::new();
    }

    let nodes = filter_tree(routes, &mut |node: &RouteNode| {
        if node.is_root() {
            return true;
        }

        let auth = checker.check_limit_by_node_path(&node.node_path, limits);
        match mode {
            RouteFilterMode::Aside => auth && node.side_visible,
            RouteFilterMode::Route => auth,
        }
    });

    let nodes = match mode {
        RouteFilterMode::Aside => nodes
            .into_iter()
            .filter(|node| !(node.is_root() && node.children.is_empty()))
            .collect(),
        RouteFilterMode::Route => nodes,
    };

    debug!("{} 过滤完成, 保留 {} 个顶层节点", mode, nodes.len());
    nodes
}
