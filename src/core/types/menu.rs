//! 权限配置表节点

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::table::OrderedTable;
use crate::core::tree::TreeNode;

/// 操作地址 -> 可读名称
pub type ActionAddrMap = BTreeMap<String, String>;

/// 权限配置表中节点上挂载的接口
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitApi {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// 声明的权限加上页面访问权限
    pub limits: Vec<String>,
    pub action_addr: String,
}

/// 节点的差异化部分：路由节点或权限子项
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MenuItemKind {
    Route {
        /// 原路由节点名称，与 `label` 相同
        #[serde(rename = "nodeLabel")]
        node_label: String,
        #[serde(rename = "sideVisible")]
        side_visible: bool,
        #[serde(skip_serializing_if = "OrderedTable::is_empty")]
        apis: OrderedTable<LimitApi>,
    },
    Limit {
        #[serde(skip_serializing_if = "Option::is_none")]
        description: Option<String>,
        /// 完整路径形式的依赖，页面访问权限本身没有依赖
        #[serde(skip_serializing_if = "Option::is_none")]
        needs: Option<Vec<String>>,
    },
}

/// 权限配置表节点
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitMenuItem {
    pub node_path: String,
    pub label: String,
    pub icon: String,
    #[serde(flatten)]
    pub kind: MenuItemKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LimitMenuItem>,
}

impl LimitMenuItem {
    pub fn is_limit(&self) -> bool {
        matches!(self.kind, MenuItemKind::Limit { .. })
    }

    /// 权限子项的依赖路径；路由节点或页面访问权限返回 None
    pub fn needs(&self) -> Option<&[String]> {
        match &self.kind {
            MenuItemKind::Limit { needs, .. } => needs.as_deref(),
            MenuItemKind::Route { .. } => None,
        }
    }

    /// 路由节点上挂载的接口
    pub fn apis(&self) -> Option<&OrderedTable<LimitApi>> {
        match &self.kind {
            MenuItemKind::Route { apis, .. } => Some(apis),
            MenuItemKind::Limit { .. } => None,
        }
    }
}

impl TreeNode for LimitMenuItem {
    fn node_path(&self) -> &str {
        &self.node_path
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut Vec<Self> {
        &mut self.children
    }
}
