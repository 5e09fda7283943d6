// ==========================================
// 运输费率系统 - API层错误类型
// ==========================================
// 职责: 汇总启动路径上的错误（配置 / 导入）
// 说明: 查询路径不产生错误,未匹配返回空列表
// ==========================================

use crate::config::ConfigError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("费率表导入失败: {0}")]
    Import(#[from] ImportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
