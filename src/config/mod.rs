// ==========================================
// 运输费率系统 - 配置层
// ==========================================
// 职责: 数据源与解析/查询参数,支持文件 + 环境变量覆写
// ==========================================

pub mod config_manager;
pub mod error;
pub mod rate_config_trait;

// 重导出核心配置管理器
pub use config_manager::{config_keys, default_config_path, env_overrides, ConfigManager};
pub use error::{ConfigError, ConfigResult};
pub use rate_config_trait::RateConfigReader;
