// ==========================================
// 运输费率系统 - 核心库
// ==========================================
// 系统定位: 运输商费率表解析 + 最低报价查询
// 数据流: 费率表 → 逐行分类 → 表头解析 → 记录提取 → 内存费率表 → 查询
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 内存费率表
pub mod repository;

// 导入层 - 费率表解析
pub mod importer;

// 配置层 - 系统配置
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 查询接口
pub mod api;

// 应用层 - 启动装配
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{ImportReport, IngestPhase, RateQuote, RateRecord, RawRow, RowKind};

// 导入
pub use importer::{ImportError, RateImporter, RateSheetImporter};

// 仓储
pub use repository::RateTable;

// API
pub use api::{ApiError, RateApi};

// 应用
pub use app::AppState;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "运输费率查询系统";
