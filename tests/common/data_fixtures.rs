//! 测试数据模块
//!
//! 一棵包含分组、隐藏页面与多层权限依赖的路由树，以及对应的页面预设

/// 路由配置
pub const ROUTES_JSON: &str = r#"[
  {
    "nodePath": "/",
    "nodeLabel": "控制台",
    "children": [
      { "nodePath": "/dashboard", "nodeLabel": "仪表盘", "icon": "fa fa-home" },
      {
        "nodePath": "/system",
        "nodeLabel": "系统管理",
        "children": [
          { "nodePath": "/system/users", "nodeLabel": "用户管理" },
          { "nodePath": "/system/roles", "nodeLabel": "角色管理" },
          { "nodePath": "/system/audit", "nodeLabel": "审计日志", "sideVisible": false }
        ]
      },
      { "nodePath": "/orders", "nodeLabel": "订单" }
    ]
  }
]"#;

/// 页面预设
pub const PRESETS_JSON: &str = r#"{
  "/system/users": {
    "limits": {
      "$page": { "label": "浏览用户" },
      "add": { "label": "添加用户", "needs": ["$page"] },
      "edit": { "label": "编辑用户", "description": "修改用户资料", "needs": ["add"] },
      "del": { "label": "删除用户", "icon": "fa fa-trash", "needs": ["edit", "reset"] },
      "reset": { "label": "重置密码", "needs": ["del"] }
    },
    "apis": {
      "list": { "url": "GET /api/users", "limits": "$page" },
      "update": { "url": "PUT /api/users/$id", "key": "users.update", "limits": ["edit"] },
      "remove": { "url": "DELETE /api/users/$id", "limits": ["del", "reset"] }
    }
  },
  "/system/roles": {
    "limits": {
      "$page": { "label": "浏览角色" },
      "edit": { "label": "编辑角色", "needs": ["missing"] }
    },
    "apis": {
      "save": { "url": "POST /api/roles", "limits": "edit" }
    }
  },
  "/orders": {
    "limits": {
      "$page": { "label": "浏览订单" },
      "edit": { "label": "编辑订单" }
    },
    "apis": {
      "save": { "url": "POST /api/orders", "limits": "edit" }
    }
  }
}"#;
