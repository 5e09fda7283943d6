// ==========================================
// 运输费率系统 - API 层
// ==========================================
// 职责: 提供查询接口,供展示层（命令行 / Web 表单）调用
// ==========================================

pub mod error;
pub mod rate_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use rate_api::RateApi;
