// ==========================================
// 运输费率系统 - 费率配置读取 Trait
// ==========================================
// 职责: 定义导入与查询所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigResult;
use std::path::PathBuf;

// ==========================================
// RateConfigReader Trait
// ==========================================
// 实现者: ConfigManager
pub trait RateConfigReader: Send + Sync {
    // ===== 数据源配置 =====

    /// 获取费率表文件路径
    ///
    /// # 返回
    /// - Ok(PathBuf): 文件路径
    /// - Err(MissingValue): 未配置（启动失败）
    fn get_workbook_path(&self) -> ConfigResult<PathBuf>;

    /// 获取工作表名
    ///
    /// # 默认值
    /// - "JAIDURGA LOGISTIC"
    fn get_sheet_name(&self) -> ConfigResult<String>;

    // ===== 解析配置 =====

    /// 获取标签列（0 起）
    ///
    /// # 默认值
    /// - 1（B 列,为空时回退 A 列）
    fn get_label_column(&self) -> ConfigResult<usize>;

    /// 运输商名称是否首字母大写输出
    ///
    /// # 默认值
    /// - true
    fn get_title_case_transporters(&self) -> ConfigResult<bool>;

    // ===== 查询配置 =====

    /// 获取返回的最低报价条数
    ///
    /// # 默认值
    /// - 3
    fn get_top_n(&self) -> ConfigResult<usize>;
}
