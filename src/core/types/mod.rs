// 核心类型模块
//
// 路由节点、页面预设以及派生出的权限配置表节点

use std::collections::HashSet;

pub mod menu;
pub mod preset;
pub mod route;

pub use menu::{ActionAddrMap, LimitApi, LimitMenuItem, MenuItemKind};
pub use preset::{ApiDef, ApiLimits, ApiTable, LimitDef, LimitTable, PagePreset};
pub use route::RouteNode;

/// 调用方已获得的权限集合
pub type AppLimits = HashSet<String>;
