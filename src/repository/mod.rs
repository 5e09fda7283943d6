// ==========================================
// 运输费率系统 - 数据仓储层
// ==========================================
// 职责: 持有导入后的费率记录,提供只读查询
// 存储: 进程内存,启动时构建一次
// ==========================================

pub mod rate_table;

// 重导出核心仓储
pub use rate_table::{RateTable, DEFAULT_TOP_N};
