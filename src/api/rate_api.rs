// ==========================================
// 运输费率系统 - 费率 API
// ==========================================
// 职责: 最低报价查询、下拉选项投影、导入报告
// 并发: 构建后只读,可在多个请求间共享
// ==========================================

use std::sync::Arc;

use crate::domain::rate::{ImportReport, RateQuote};
use crate::repository::{RateTable, DEFAULT_TOP_N};

// ==========================================
// RateApi - 费率 API
// ==========================================

/// 费率API
///
/// 职责：
/// 1. 按重量档 + 地点查询最便宜的运输商
/// 2. 提供展示层下拉列表（重量档 / 地点 / 运输商）
/// 3. 暴露启动时的导入报告
pub struct RateApi {
    rate_table: Arc<RateTable>,
    import_report: Option<ImportReport>,
    top_n: usize,
}

impl RateApi {
    /// 创建新的RateApi实例
    ///
    /// # 参数
    /// - rate_table: 已导入的费率表
    /// - import_report: 导入报告（内存构建时为 None）
    /// - top_n: 默认返回条数
    pub fn new(rate_table: RateTable, import_report: Option<ImportReport>, top_n: usize) -> Self {
        Self {
            rate_table: Arc::new(rate_table),
            import_report,
            top_n,
        }
    }

    /// 以默认条数（3）构建
    pub fn from_table(rate_table: RateTable) -> Self {
        Self::new(rate_table, None, DEFAULT_TOP_N)
    }

    /// 查询最便宜的运输商（按配置条数）
    ///
    /// # 返回
    /// - 按费率升序,最多 top_n 条;无匹配为空列表
    pub fn recommend(&self, weight_label: &str, location: &str) -> Vec<RateQuote> {
        self.rate_table.query_top(weight_label, location, self.top_n)
    }

    /// 查询最便宜的运输商（显式条数）
    pub fn recommend_top(&self, weight_label: &str, location: &str, n: usize) -> Vec<RateQuote> {
        self.rate_table.query_top(weight_label, location, n)
    }

    /// 重量档下拉选项
    pub fn weight_options(&self) -> Vec<String> {
        self.rate_table.weight_labels()
    }

    /// 地点下拉选项
    pub fn location_options(&self) -> Vec<String> {
        self.rate_table.locations()
    }

    /// 运输商列表
    pub fn transporter_options(&self) -> Vec<String> {
        self.rate_table.transporters()
    }

    pub fn import_report(&self) -> Option<&ImportReport> {
        self.import_report.as_ref()
    }

    pub fn rate_table(&self) -> &RateTable {
        &self.rate_table
    }

    pub fn top_n(&self) -> usize {
        self.top_n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rate::RateRecord;

    fn api(top_n: usize) -> RateApi {
        let table: RateTable = (1..=5)
            .map(|i| RateRecord {
                transporter: format!("Carrier {}", i),
                weight_label: "100 Kg".to_string(),
                location: "Agra".to_string(),
                rate: 1000.0 - i as f64 * 100.0,
            })
            .collect();
        RateApi::new(table, None, top_n)
    }

    #[test]
    fn test_recommend_uses_configured_top_n() {
        assert_eq!(api(3).recommend("100 Kg", "Agra").len(), 3);
        assert_eq!(api(2).recommend("100 Kg", "Agra").len(), 2);
        assert_eq!(api(2).recommend_top("100 Kg", "Agra", 4).len(), 4);
    }

    #[test]
    fn test_recommend_cheapest_first() {
        let quotes = api(3).recommend("100 kg", "AGRA");
        let rates: Vec<f64> = quotes.iter().map(|q| q.rate).collect();
        assert_eq!(rates, vec![500.0, 600.0, 700.0]);
        assert_eq!(quotes[0].transporter, "Carrier 5");
    }

    #[test]
    fn test_options() {
        let api = api(3);
        assert_eq!(api.weight_options(), vec!["100 Kg"]);
        assert_eq!(api.location_options(), vec!["Agra"]);
        assert_eq!(api.transporter_options().len(), 5);
        assert!(api.import_report().is_none());
    }
}
