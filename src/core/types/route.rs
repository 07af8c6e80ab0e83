//! 路由节点

use serde::{Deserialize, Serialize};

use crate::core::constants::ROOT_NODE_PATH;
use crate::core::error::{LimitError, LimitResult};
use crate::core::tree::TreeNode;

/// 路由树节点
///
/// `node_path` 在整棵树中唯一，是关联页面预设与权限检查的主键
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteNode {
    pub node_path: String,
    #[serde(default)]
    pub node_label: String,
    #[serde(default = "default_side_visible")]
    pub side_visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
}

fn default_side_visible() -> bool {
    true
}

impl RouteNode {
    pub fn new(node_path: impl Into<String>, node_label: impl Into<String>) -> Self {
        Self {
            node_path: node_path.into(),
            node_label: node_label.into(),
            side_visible: true,
            icon: None,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_side_visible(mut self, side_visible: bool) -> Self {
        self.side_visible = side_visible;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.node_path == ROOT_NODE_PATH
    }

    /// 从 JSON 解析路由森林（顶层为节点数组）
    pub fn forest_from_json(json: &str) -> LimitResult<Vec<RouteNode>> {
        serde_json::from_str(json).map_err(|e| LimitError::invalid_route_config(e.to_string()))
    }
}

impl TreeNode for RouteNode {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_node_defaults() {
        let forest = RouteNode::forest_from_json(
            r#"[{"nodePath": "/", "nodeLabel": "首页", "children": [{"nodePath": "/users"}]}]"#,
        )
        .expect("路由解析应该成功");

        assert_eq!(forest.len(), 1);
        let root = &forest[0];
        assert!(root.is_root());
        assert!(root.side_visible);
        assert_eq!(root.children[0].node_label, "");
        assert!(root.children[0].side_visible);
        assert!(root.children[0].children.is_empty());
    }

    #[test]
    fn test_route_node_invalid_json() {
        let err = RouteNode::forest_from_json(r#"{"nodePath": "/"}"#).unwrap_err();
        assert!(matches!(err, LimitError::InvalidRouteConfig(_)));
    }
}
