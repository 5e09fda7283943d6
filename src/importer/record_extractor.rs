// ==========================================
// 运输费率系统 - 费率记录提取器
// ==========================================
// 职责: 数据行 × 表头 → 扁平费率记录
// 规则: 每个费率单元格按表头中的 '/' 拆分为多个地点,同一费率复制到每个地点
// 红线: 无法解析的单元格静默跳过,不产生空费率记录
// ==========================================

use crate::domain::rate::{RateRecord, RawRow};
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::header_resolver::ResolvedHeaders;
use crate::importer::importer_trait::DataCleaner as _;

#[derive(Debug, Clone, Copy)]
pub struct RecordExtractor {
    label_column: usize,
    title_case_transporters: bool,
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self {
            label_column: 1,
            title_case_transporters: true,
        }
    }
}

impl RecordExtractor {
    pub fn new(label_column: usize, title_case_transporters: bool) -> Self {
        Self {
            label_column,
            title_case_transporters,
        }
    }

    /// 从数据行提取费率记录
    ///
    /// # 参数
    /// - row: 数据行
    /// - transporter: 当前运输商（原文）
    /// - headers: 当前表头
    ///
    /// # 返回
    /// - 记录列表（可能为空）
    pub fn extract(
        &self,
        row: &RawRow,
        transporter: &str,
        headers: &ResolvedHeaders,
    ) -> Vec<RateRecord> {
        let cleaner = DataCleaner;
        let weight_label = row.label_cell(self.label_column).to_string();
        let transporter = if self.title_case_transporters {
            cleaner.title_case(transporter.trim())
        } else {
            transporter.trim().to_string()
        };

        let mut records = Vec::new();
        for (column, header) in headers.rate_columns() {
            let Some(cell) = row.cell(column) else {
                continue;
            };
            let Some(rate) = cleaner.parse_rate(cell) else {
                continue;
            };

            for location in cleaner.split_locations(header) {
                records.push(RateRecord {
                    transporter: transporter.clone(),
                    weight_label: weight_label.clone(),
                    location,
                    rate,
                });
            }
        }

        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(items: &[&str]) -> ResolvedHeaders {
        ResolvedHeaders::new(1, items.iter().map(|h| h.to_string()).collect())
    }

    #[test]
    fn test_multi_location_header_duplicates_rate() {
        let extractor = RecordExtractor::default();
        let row = RawRow::from_strs(7, &["", "Upto 50 Kg", "500"]);

        let records = extractor.extract(
            &row,
            "ABC Logistics",
            &headers(&["WEIGHT CAPACITY", "Delhi/Mumbai/Pune"]),
        );

        assert_eq!(records.len(), 3);
        let locations: Vec<&str> = records.iter().map(|r| r.location.as_str()).collect();
        assert_eq!(locations, vec!["Delhi", "Mumbai", "Pune"]);
        assert!(records.iter().all(|r| r.rate == 500.0));
        assert!(records.iter().all(|r| r.weight_label == "Upto 50 Kg"));
    }

    #[test]
    fn test_unparseable_cells_are_skipped() {
        let extractor = RecordExtractor::default();
        let row = RawRow::from_strs(3, &["", "100 Kg", "N/A", "₹1,250.50", ""]);

        let records = extractor.extract(
            &row,
            "XYZ TRANSPORT",
            &headers(&["WEIGHT", "Agra", "Surat", "Pune"]),
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "Surat");
        assert_eq!(records[0].rate, 1250.50);
        assert_eq!(records[0].transporter, "Xyz Transport");
    }

    #[test]
    fn test_short_row_skips_out_of_range_columns() {
        let extractor = RecordExtractor::default();
        let row = RawRow::from_strs(3, &["", "100 Kg", "300"]);

        let records = extractor.extract(&row, "Fast Movers", &headers(&["W", "Agra", "Surat"]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "Agra");
    }

    #[test]
    fn test_placeholder_header_becomes_location() {
        let extractor = RecordExtractor::default();
        let row = RawRow::from_strs(3, &["", "100 Kg", "300"]);

        let records = extractor.extract(&row, "Fast Movers", &headers(&["W", "Loc_3"]));

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].location, "Loc_3");
    }

    #[test]
    fn test_verbatim_transporter_when_title_case_disabled() {
        let extractor = RecordExtractor::new(1, false);
        let row = RawRow::from_strs(3, &["", "100 Kg", "300"]);

        let records = extractor.extract(&row, " ABC Logistics ", &headers(&["W", "agra"]));

        assert_eq!(records[0].transporter, "ABC Logistics");
        assert_eq!(records[0].location, "Agra");
    }
}
