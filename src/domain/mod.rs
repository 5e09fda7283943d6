// ==========================================
// 运输费率系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含解析逻辑,不含查询逻辑
// ==========================================

pub mod rate;
pub mod types;

// 重导出核心类型
pub use rate::{ImportReport, RateQuote, RateRecord, RawRow};
pub use types::{IngestPhase, RowKind};
