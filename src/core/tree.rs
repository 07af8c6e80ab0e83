//! 树结构通用操作
//!
//! 路由节点与权限配置表节点共享“路径 + 子节点”的能力，过滤与查找都基于它实现。
//! 遍历顺序固定为深度优先、子节点按声明顺序。

/// 具有路径与有序子节点的树节点
pub trait TreeNode: Sized {
    fn node_path(&self) -> &str;

    fn children(&self) -> &[Self];

    fn children_mut(&mut self) -> &mut Vec<Self>;
}

/// 过滤树
///
/// 子节点先过滤，节点本身随后以过滤后的子节点参与判定；不满足条件的节点连同子树一起移除
pub fn filter_tree<T, F>(nodes: &[T], predicate: &mut F) -> Vec<T>
where
    T: TreeNode + Clone,
    F: FnMut(&T) -> bool,
{
    nodes
        .iter()
        .filter_map(|node| {
            let children = filter_tree(node.children(), predicate);
            let mut node = node.clone();
            *node.children_mut() = children;
            if predicate(&node) {
                Some(node)
            } else {
                None
            }
        })
        .collect()
}

/// 先序遍历，回调参数为节点与深度（顶层为 1）
pub fn walk_tree<T, F>(nodes: &[T], visit: &mut F)
where
    T: TreeNode,
    F: FnMut(&T, usize),
{
    fn walk<T: TreeNode, F: FnMut(&T, usize)>(nodes: &[T], level: usize, visit: &mut F) {
        for node in nodes {
            visit(node, level);
            walk(node.children(), level + 1, visit);
        }
    }
    walk(nodes, 1, visit);
}

/// 按路径查找节点
pub fn find_node<'a, T: TreeNode>(nodes: &'a [T], node_path: &str) -> Option<&'a T> {
    for node in nodes {
        if node.node_path() == node_path {
            return Some(node);
        }
        if let Some(found) = find_node(node.children(), node_path) {
            return Some(found);
        }
    }
    None
}

/// 先序收集所有节点路径
pub fn collect_paths<T: TreeNode>(nodes: &[T]) -> Vec<String> {
    let mut paths = Vec::new();
    walk_tree(nodes, &mut |node: &T, _| paths.push(node.node_path().to_string()));
    paths
}
