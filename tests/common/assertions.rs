//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use route_limit::core::tree::{collect_paths, TreeNode};

/// 断言集合包含指定数量的元素
pub fn assert_count<T>(collection: &[T], expected: usize, item_name: &str) {
    assert_eq!(
        collection.len(),
        expected,
        "{}数量不匹配: 期望 {}, 实际 {}",
        item_name,
        expected,
        collection.len()
    );
}

/// 断言树的先序路径
pub fn assert_paths<T: TreeNode>(nodes: &[T], expected: &[&str]) {
    let paths = collect_paths(nodes);
    assert_eq!(paths, expected, "树路径不匹配");
}

/// 断言树中包含指定路径
pub fn assert_has_path<T: TreeNode>(nodes: &[T], path: &str) {
    let paths = collect_paths(nodes);
    assert!(
        paths.iter().any(|p| p == path),
        "树中应包含路径 '{}', 实际是 {:?}",
        path,
        paths
    );
}
