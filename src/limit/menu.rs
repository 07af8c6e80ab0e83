//! 权限配置表构建
//!
//! 深度优先先序遍历路由树，对有预设的节点：
//! 1. `limits` 展开为权限子项，替换原有子节点
//! 2. `apis` 写入操作地址映射，并在节点上挂载补全了页面权限的接口

use log::{debug, info};

use crate::config::LimitConfig;
use crate::core::table::OrderedTable;
use crate::core::tree::walk_tree;
use crate::core::types::{
    ActionAddrMap, ApiTable, LimitApi, LimitDef, LimitMenuItem, LimitTable, MenuItemKind,
    RouteNode,
};
use crate::limit::action::build_action_addr;
use crate::limit::needs::resolve_limit_needs;
use crate::limit::provider::PagePresetProvider;

/// 一次构建的产物
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LimitMenus {
    pub menus: Vec<LimitMenuItem>,
    pub action_addr_map: ActionAddrMap,
}

/// 权限配置表构建器
pub struct LimitMenuBuilder<'a> {
    presets: &'a dyn PagePresetProvider,
    config: &'a LimitConfig,
    action_addr_map: ActionAddrMap,
}

impl<'a> LimitMenuBuilder<'a> {
    pub fn new(presets: &'a dyn PagePresetProvider, config: &'a LimitConfig) -> Self {
        Self {
            presets,
            config,
            action_addr_map: ActionAddrMap::new(),
        }
    }

    pub fn build(mut self, routes: &[RouteNode]) -> LimitMenus {
        let menus: Vec<LimitMenuItem> = routes.iter().map(|node| self.transform(node)).collect();

        let mut limit_count = 0usize;
        walk_tree(&menus, &mut |item: &LimitMenuItem, _| {
            if item.is_limit() {
                limit_count += 1;
            }
        });
        info!(
            "权限配置表构建完成: {} 个权限项, {} 个操作地址",
            limit_count,
            self.action_addr_map.len()
        );

        LimitMenus {
            menus,
            action_addr_map: self.action_addr_map,
        }
    }

    fn transform(&mut self, node: &RouteNode) -> LimitMenuItem {
        let preset = self.presets.page_preset(node).unwrap_or_default();
        let limits = preset.limits.as_ref();

        // 先处理当前节点的 apis，保证操作地址按先序写入
        let apis = match &preset.apis {
            Some(apis) => self.collect_apis(node, apis, limits),
            None => OrderedTable::new(),
        };

        let children = match limits {
            Some(limits) => {
                debug!("节点 {} 展开 {} 个权限项", node.node_path, limits.len());
                limits
                    .iter()
                    .map(|(key, def)| self.limit_item(&node.node_path, key, def, limits))
                    .collect()
            }
            None => node
                .children
                .iter()
                .map(|child| self.transform(child))
                .collect(),
        };

        LimitMenuItem {
            node_path: node.node_path.clone(),
            label: node.node_label.clone(),
            icon: node
                .icon
                .clone()
                .unwrap_or_else(|| self.config.route_icon.clone()),
            kind: MenuItemKind::Route {
                node_label: node.node_label.clone(),
                side_visible: node.side_visible,
                apis,
            },
            children,
        }
    }

    fn limit_item(
        &self,
        parent_path: &str,
        key: &str,
        def: &LimitDef,
        limits: &LimitTable,
    ) -> LimitMenuItem {
        let page_key = &self.config.route_limit_key;
        let needs = if key == page_key {
            None
        } else {
            Some(
                resolve_limit_needs(key, limits, page_key)
                    .into_iter()
                    .map(|need| format!("{}/{}", parent_path, need))
                    .collect(),
            )
        };

        LimitMenuItem {
            node_path: format!("{}/{}", parent_path, key),
            label: def.label.clone(),
            icon: def
                .icon
                .clone()
                .unwrap_or_else(|| self.config.limit_icon.clone()),
            kind: MenuItemKind::Limit {
                description: def.description.clone(),
                needs,
            },
            children: Vec::new(),
        }
    }

    fn collect_apis(
        &mut self,
        node: &RouteNode,
        apis: &ApiTable,
        limits: Option<&LimitTable>,
    ) -> OrderedTable<LimitApi> {
        let delimiter = &self.config.str_delimiter;
        let mut collected = OrderedTable::new();

        for (api_key, api) in apis.iter() {
            let preset_needs = api.preset_needs();

            let action_addr = build_action_addr(&node.node_path, &preset_needs, delimiter);
            let need_labels: Vec<&str> = preset_needs
                .iter()
                .map(|need| {
                    limits
                        .and_then(|table| table.get(need))
                        .map(|def| def.label.as_str())
                        .unwrap_or("")
                })
                .collect();
            let action_label = format!("{}{}{}", node.node_label, delimiter, need_labels.join(","));

            if let Some(previous) = self
                .action_addr_map
                .insert(action_addr.clone(), action_label)
            {
                debug!("操作地址 {} 被覆盖, 原名称: {}", action_addr, previous);
            }

            let mut api_limits = preset_needs;
            api_limits.push(self.config.route_limit_key.clone());

            collected.insert(
                api_key,
                LimitApi {
                    url: api.url.clone(),
                    key: api.key.clone(),
                    limits: api_limits,
                    action_addr,
                },
            );
        }

        collected
    }
}

/// 构建权限配置表与操作地址映射
pub fn build_limit_menus(
    routes: &[RouteNode],
    presets: &dyn PagePresetProvider,
    config: &LimitConfig,
) -> LimitMenus {
    LimitMenuBuilder::new(presets, config).build(routes)
}
