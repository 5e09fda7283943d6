// ==========================================
// 运输费率系统 - 内存费率表
// ==========================================
// 职责: 持有导入产出的费率记录,提供查询与去重投影
// 红线: 导入完成后只读,不去重,不持久化
// ==========================================

use crate::domain::rate::{RateQuote, RateRecord};
use std::collections::BTreeSet;
use tracing::debug;

/// 默认返回的最低报价条数
pub const DEFAULT_TOP_N: usize = 3;

// ==========================================
// RateTable - 费率表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateTable {
    records: Vec<RateRecord>,
}

impl RateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加记录（仅导入阶段使用）
    pub fn extend<I>(&mut self, records: I)
    where
        I: IntoIterator<Item = RateRecord>,
    {
        self.records.extend(records);
    }

    /// 全部记录（插入顺序）
    pub fn records(&self) -> &[RateRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 查询最低的 3 条报价
    pub fn query(&self, weight_label: &str, location: &str) -> Vec<RateQuote> {
        self.query_top(weight_label, location, DEFAULT_TOP_N)
    }

    /// 查询最低的 n 条报价
    ///
    /// # 规则
    /// - 重量档与地点均为大小写不敏感的精确匹配
    /// - 按费率升序稳定排序（同价保持插入顺序）
    /// - 无匹配返回空列表
    pub fn query_top(&self, weight_label: &str, location: &str, n: usize) -> Vec<RateQuote> {
        let weight_key = weight_label.to_lowercase();
        let location_key = location.to_lowercase();

        let mut matches: Vec<&RateRecord> = self
            .records
            .iter()
            .filter(|r| {
                r.weight_label.to_lowercase() == weight_key
                    && r.location.to_lowercase() == location_key
            })
            .collect();

        debug!(
            weight_label = %weight_label,
            location = %location,
            matched = matches.len(),
            "费率查询"
        );

        matches.sort_by(|a, b| a.rate.total_cmp(&b.rate));
        matches.into_iter().take(n).map(RateQuote::from).collect()
    }

    /// 去重排序后的全部重量档
    pub fn weight_labels(&self) -> Vec<String> {
        self.distinct(|r| &r.weight_label)
    }

    /// 去重排序后的全部地点
    pub fn locations(&self) -> Vec<String> {
        self.distinct(|r| &r.location)
    }

    /// 去重排序后的全部运输商
    pub fn transporters(&self) -> Vec<String> {
        self.distinct(|r| &r.transporter)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&RateRecord) -> &String,
    {
        self.records
            .iter()
            .map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }
}

impl FromIterator<RateRecord> for RateTable {
    fn from_iter<I: IntoIterator<Item = RateRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
