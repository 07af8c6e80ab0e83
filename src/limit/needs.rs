//! preset.limits.needs 依赖解析
//!
//! 计算某个权限在所属节点权限表内的依赖闭包。页面访问权限总会被加入结果，
//! 已访问集合保证循环依赖时也能终止。

use std::collections::HashSet;

use crate::core::types::LimitTable;

/// 解析 `key` 的依赖闭包
///
/// 返回按首次访问顺序排列、去重后的 key 列表，页面访问权限总是排在第一位。
/// 表中不存在的 key 仍会出现在结果中，只是不再继续展开。
pub fn resolve_limit_needs(key: &str, limits: &LimitTable, route_limit_key: &str) -> Vec<String> {
    let mut checked: HashSet<String> = HashSet::new();
    let mut order: Vec<String> = Vec::new();

    let mut seed: Vec<String> = limits
        .get(key)
        .map(|def| def.needs().to_vec())
        .unwrap_or_default();

    // 添加默认页面权限
    checked.insert(route_limit_key.to_string());
    order.push(route_limit_key.to_string());
    if key != route_limit_key {
        seed.push(route_limit_key.to_string());
    }

    // 显式栈上的深度优先展开，栈帧为 (待处理列表, 下标)
    let mut stack: Vec<(Vec<String>, usize)> = vec![(seed, 0)];
    while let Some((frame, index)) = stack.last_mut() {
        let Some(next) = frame.get(*index).cloned() else {
            stack.pop();
            continue;
        };
        *index += 1;

        if checked.insert(next.clone()) {
            let needs = limits
                .get(&next)
                .map(|def| def.needs().to_vec())
                .unwrap_or_default();
            order.push(next);
            if !needs.is_empty() {
                stack.push((needs, 0));
            }
        }
    }

    order
}
