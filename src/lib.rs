//! route-limit - 路由树权限模型
//!
//! 从声明式的路由/页面树推导权限模型：
//! - 每个页面可授予的权限配置表（含依赖闭包与接口到权限的映射）
//! - 按用户已获得权限过滤后的路由树与侧边栏菜单

pub mod config;
pub mod core;
pub mod limit;
pub mod utils;
