// ==========================================
// 运输费率系统 - 数据清洗器实现
// ==========================================
// 职责: 费率数值提取 / 地名首字母大写 / 多地点表头拆分
// 红线: 费率解析失败返回 None,不抛错
// ==========================================

use crate::importer::importer_trait::DataCleaner as DataCleanerTrait;

/// 多地点表头的分隔符
pub const LOCATION_SEPARATOR: char = '/';

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn parse_rate(&self, value: &str) -> Option<f64> {
        let digits: String = value
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse::<f64>().ok()
    }

    fn title_case(&self, value: &str) -> String {
        // 字母前一位也是字母则小写,否则大写（数字、空白、符号均视为词边界）
        let mut out = String::with_capacity(value.len());
        let mut prev_cased = false;
        for c in value.chars() {
            if c.is_alphabetic() {
                if prev_cased {
                    out.extend(c.to_lowercase());
                } else {
                    out.extend(c.to_uppercase());
                }
                prev_cased = true;
            } else {
                out.push(c);
                prev_cased = false;
            }
        }
        out
    }
}

impl DataCleaner {
    /// 拆分多地点表头（"Delhi/Mumbai/Pune" → 三个地点）
    ///
    /// # 规则
    /// - 按 '/' 拆分
    /// - 每段 TRIM 后首字母大写
    /// - 丢弃空段
    pub fn split_locations(&self, header: &str) -> Vec<String> {
        header
            .split(LOCATION_SEPARATOR)
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| self.title_case(segment))
            .collect()
    }
}
