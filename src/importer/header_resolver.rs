// ==========================================
// 运输费率系统 - 表头解析器
// ==========================================
// 职责: 生成逐列表头（单行表头 / WEIGHT+CAPACITY 拆分表头）
// 约定: 表头从标签列开始,标签列自身占位 0,费率列从位置 1 开始
// ==========================================

use crate::domain::rate::RawRow;
use serde::{Deserialize, Serialize};

/// 无地点名时的占位表头（列号为 1 起）
pub fn placeholder_header(column: usize) -> String {
    format!("Loc_{}", column + 1)
}

// ==========================================
// ResolvedHeaders - 已解析的表头集合
// ==========================================
// headers[k] 对应表格第 label_column + k 列
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedHeaders {
    label_column: usize,
    headers: Vec<String>,
}

impl ResolvedHeaders {
    pub fn new(label_column: usize, headers: Vec<String>) -> Self {
        Self {
            label_column,
            headers,
        }
    }

    pub fn label_column(&self) -> usize {
        self.label_column
    }

    pub fn as_slice(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// 费率列迭代（跳过标签列自身）
    ///
    /// # 返回
    /// - (表格列号, 表头文本)
    pub fn rate_columns(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.headers
            .iter()
            .enumerate()
            .skip(1)
            .map(move |(offset, header)| (self.label_column + offset, header.as_str()))
    }
}

// ==========================================
// HeaderResolver - 表头解析器
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct HeaderResolver {
    label_column: usize,
}

impl Default for HeaderResolver {
    fn default() -> Self {
        Self { label_column: 1 }
    }
}

impl HeaderResolver {
    pub fn new(label_column: usize) -> Self {
        Self { label_column }
    }

    /// 拆分表头: 逐列拼接 WEIGHT 行与 CAPACITY 行
    ///
    /// # 规则
    /// - 两行单元格各自 TRIM 后以单个空格拼接,再 TRIM
    /// - 拼接结果为空 → 占位表头 Loc_<列号>
    /// - 两行宽度不一时按较宽行处理,缺失单元格视为空
    pub fn resolve_split_headers(&self, prior: &RawRow, current: &RawRow) -> ResolvedHeaders {
        let width = prior.len().max(current.len());
        let headers = (self.label_column..width)
            .map(|column| {
                let upper = prior.cell(column).unwrap_or("").trim();
                let lower = current.cell(column).unwrap_or("").trim();
                let combined = format!("{} {}", upper, lower);
                let combined = combined.trim();
                if combined.is_empty() {
                    placeholder_header(column)
                } else {
                    combined.to_string()
                }
            })
            .collect();

        ResolvedHeaders::new(self.label_column, headers)
    }

    /// 单行表头: 逐列取 TRIM 后文本,空单元格用占位表头
    pub fn resolve_single_row_headers(&self, row: &RawRow) -> ResolvedHeaders {
        let headers = (self.label_column..row.len())
            .map(|column| {
                let text = row.cell(column).unwrap_or("").trim();
                if text.is_empty() {
                    placeholder_header(column)
                } else {
                    text.to_string()
                }
            })
            .collect();

        ResolvedHeaders::new(self.label_column, headers)
    }
}
