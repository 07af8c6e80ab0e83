//! 操作地址
//!
//! 格式: `${nodePath}${delimiter}${limitKeys.join(",")}`

/// 拼接操作地址
pub fn build_action_addr(node_path: &str, limit_keys: &[String], delimiter: &str) -> String {
    format!("{}{}{}", node_path, delimiter, limit_keys.join(","))
}

/// 拆分操作地址为节点路径与权限 key 列表
///
/// 不包含分隔符时返回 None；key 列表为空串时返回空列表
pub fn parse_action_addr(addr: &str, delimiter: &str) -> Option<(String, Vec<String>)> {
    let (node_path, keys) = addr.rsplit_once(delimiter)?;
    let keys = keys
        .split(',')
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    Some((node_path.to_string(), keys))
}
