// ==========================================
// 运输费率系统 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// ==========================================

use crate::domain::rate::{ImportReport, RawRow};
use crate::importer::error::ImportResult;
use crate::repository::RateTable;
use std::path::Path;

// ==========================================
// SheetParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: ExcelSheetParser, CsvSheetParser, UniversalSheetParser
pub trait SheetParser: Send + Sync {
    /// 读取指定工作表的全部行
    ///
    /// # 参数
    /// - file_path: 文件路径
    /// - sheet_name: 工作表名（CSV 忽略）
    ///
    /// # 返回
    /// - Ok(Vec<RawRow>): 按物理行顺序,cells[0] 对应 A 列
    /// - Err: 文件不存在、不可读、工作表不存在
    fn read_rows(&self, file_path: &Path, sheet_name: &str) -> ImportResult<Vec<RawRow>>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 单元格文本清洗接口
// 实现者: DataCleanerImpl
pub trait DataCleaner: Send + Sync {
    /// 提取费率数值
    ///
    /// # 规则
    /// - 仅保留 ASCII 数字 0-9 与 '.',其余字符（含天城文、全角等非 ASCII 数字）全部去除
    /// - 清洗后为空 → None
    /// - 无法解析为浮点数 → None
    fn parse_rate(&self, value: &str) -> Option<f64>;

    /// 首字母大写（每个字母序列的首字母大写,其余小写）
    fn title_case(&self, value: &str) -> String;
}

// ==========================================
// RateImporter Trait
// ==========================================
// 用途: 费率表导入主接口
// 实现者: RateSheetImporter
pub trait RateImporter {
    /// 从文件导入费率表
    ///
    /// # 返回
    /// - Ok((RateTable, ImportReport)): 费率表 + 导入报告
    /// - Err: 仅启动级失败（文件/工作表不可用）
    fn import_from_file(
        &self,
        file_path: &Path,
        sheet_name: &str,
    ) -> ImportResult<(RateTable, ImportReport)>;

    /// 从内存行导入（单遍扫描,不回溯）
    fn import_rows(&self, rows: &[RawRow]) -> RateTable;
}
