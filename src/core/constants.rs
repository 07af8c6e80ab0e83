//! 权限模型共享常量
//!
//! 生产方（权限配置表构建）与消费方（操作地址映射的使用者）必须使用同一组常量

/// 页面访问权限的 key，节点上其余权限都隐式依赖它
pub const ROUTE_LIMIT_KEY: &str = "$page";

/// 操作地址中节点路径与权限 key 列表之间的分隔符
pub const STR_DELIMITER: &str = "@@";

/// 权限子项缺省图标
pub const DEFAULT_LIMIT_ICON: &str = "fa fa-code";

/// 路由节点缺省图标
pub const DEFAULT_ROUTE_ICON: &str = "fa fa-code-fork";

/// 根节点路径
pub const ROOT_NODE_PATH: &str = "/";
