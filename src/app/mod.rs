// ==========================================
// 运输费率系统 - 应用层
// ==========================================
// 职责: 启动装配（配置 → 导入 → 费率表 → API）
// ==========================================

pub mod state;

// 重导出
pub use state::AppState;
