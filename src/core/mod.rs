pub mod constants;
pub mod error;
pub mod table;
pub mod tree;
pub mod types;

// 错误和结果类型
pub use error::{LimitError, LimitResult};

// 核心数据类型
pub use table::OrderedTable;
pub use tree::TreeNode;
pub use types::*;
