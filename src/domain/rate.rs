// ==========================================
// 运输费率系统 - 费率领域模型
// ==========================================
// 职责: 原始行、费率记录、报价、导入报告
// 红线: 不含解析逻辑,不含查询逻辑
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// RawRow - 原始表格行
// ==========================================
// 用途: 文件解析器产出,解析驱动器消费
// 约定: cells[0] 对应表格 A 列,空单元格为 ""
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub index: usize,       // 行号（0 起,与表格物理行对齐）
    pub cells: Vec<String>, // 单元格文本
}

impl RawRow {
    pub fn new(index: usize, cells: Vec<String>) -> Self {
        Self { index, cells }
    }

    /// 便于测试构造: `RawRow::from_strs(3, &["", "100 Kg", "450"])`
    pub fn from_strs(index: usize, cells: &[&str]) -> Self {
        Self {
            index,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// 读取指定列（越界返回 None）
    pub fn cell(&self, column: usize) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 整行是否全为空白
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }

    /// 标签单元格（已 TRIM）
    ///
    /// # 规则
    /// - 优先取 label_column 列
    /// - 该列为空时回退到前一列
    pub fn label_cell(&self, label_column: usize) -> &str {
        match self.cell(label_column) {
            Some(value) if !value.is_empty() => value.trim(),
            _ => label_column
                .checked_sub(1)
                .and_then(|fallback| self.cell(fallback))
                .map(str::trim)
                .unwrap_or(""),
        }
    }
}

// ==========================================
// RateRecord - 扁平费率记录
// ==========================================
// 用途: 记录提取器产出,费率表持有
// 红线: Rate 必须为成功解析的数值,解析失败的单元格不产生记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateRecord {
    pub transporter: String,  // 运输商
    pub weight_label: String, // 重量档（原文保留）
    pub location: String,     // 目的地（已首字母大写）
    pub rate: f64,            // 费率
}

// ==========================================
// RateQuote - 查询结果行
// ==========================================
// 用途: 查询接口返回给展示层
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateQuote {
    pub transporter: String,
    pub weight_label: String,
    pub rate: f64,
}

impl From<&RateRecord> for RateQuote {
    fn from(record: &RateRecord) -> Self {
        Self {
            transporter: record.transporter.clone(),
            weight_label: record.weight_label.clone(),
            rate: record.rate,
        }
    }
}

// ==========================================
// ImportReport - 导入报告
// ==========================================
// 用途: 启动时一次性导入的汇总统计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub batch_id: String,           // 导入批次 ID
    pub source_path: String,        // 源文件路径
    pub sheet_name: String,         // 工作表名
    pub imported_at: DateTime<Utc>, // 导入时间
    pub total_rows: usize,          // 总行数
    pub transporter_blocks: usize,  // 运输商块数
    pub header_rows: usize,         // 表头行数（拆分表头按两行计）
    pub data_rows: usize,           // 数据行数
    pub skipped_rows: usize,        // 跳过行数
    pub record_count: usize,        // 产出费率记录数
    pub elapsed_ms: u64,            // 耗时（毫秒）
}
