// ==========================================
// 运输费率系统 - 行分类器
// ==========================================
// 职责: 根据标签单元格判定行类型
// 规则顺序: 运输商 → WEIGHT 行 → CAPACITY 行 → 组合表头 → 数据行 → 跳过
// 红线: 纯函数,不修改解析状态
// ==========================================

use crate::domain::types::RowKind;
use once_cell::sync::Lazy;
use regex::Regex;

/// 运输商名称黑名单（大写子串匹配）
pub const TRANSPORTER_BLACKLIST: &[&str] =
    &["LOCATION", "TON", "CHARGES", "EXTRA", "KG", "KM", "AMOUNT"];

/// 运输商名称允许的非字母字符
const TRANSPORTER_PUNCTUATION: &[char] = &['&', '-', '/'];

const WEIGHT_KEYWORD: &str = "WEIGHT";
const CAPACITY_KEYWORD: &str = "CAPACITY";

// 单行组合表头: WEIGHT…CAPACITY / CAPACITY…WEIGHT / WEIGHT (单位)
static COMPOSITE_HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"WEIGHT.*CAPACITY|CAPACITY.*WEIGHT|WEIGHT\s*\(.*\)")
        .expect("composite header pattern is valid")
});

// ==========================================
// ClassifyContext - 分类所需的解析上下文
// ==========================================
// 由解析驱动器按当前 ParseState 构造
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassifyContext {
    pub awaiting_capacity: bool, // 存在未消费的 WEIGHT 行
    pub block_ready: bool,       // 运输商与表头均已就绪
}

// ==========================================
// RowClassifier - 行分类器
// ==========================================
#[derive(Debug, Clone, Copy, Default)]
pub struct RowClassifier;

impl RowClassifier {
    /// 判定行类型
    ///
    /// # 参数
    /// - label: 标签单元格（已 TRIM）
    /// - ctx: 当前解析上下文
    pub fn classify(&self, label: &str, ctx: ClassifyContext) -> RowKind {
        let label = label.trim();
        let upper = label.to_uppercase();

        if self.is_transporter_candidate(label) {
            return RowKind::TransporterName;
        }

        if upper == WEIGHT_KEYWORD {
            return RowKind::WeightOnlyHeader;
        }

        if upper.contains(CAPACITY_KEYWORD) && ctx.awaiting_capacity {
            return RowKind::CapacityHeader;
        }

        if COMPOSITE_HEADER_RE.is_match(&upper) {
            return RowKind::CompositeWeightCapacityHeader;
        }

        if ctx.block_ready && !label.is_empty() && !upper.contains(WEIGHT_KEYWORD) {
            return RowKind::DataRow;
        }

        RowKind::Skip
    }

    /// 运输商候选: 非空,不含 WEIGHT/CAPACITY,且满足名称规则
    ///
    /// 含 WEIGHT/CAPACITY 的文本永远不会被识别为运输商,即便其余条件都满足。
    pub fn is_transporter_candidate(&self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return false;
        }
        let upper = label.to_uppercase();
        if upper.contains(WEIGHT_KEYWORD) || upper.contains(CAPACITY_KEYWORD) {
            return false;
        }
        self.is_valid_transporter(label)
    }

    /// 运输商名称规则
    ///
    /// # 条件（全部满足）
    /// 1. 至少两个空白分隔的词
    /// 2. 仅含字母、空白、& - /
    /// 3. 不含数字
    /// 4. 大写后不含黑名单子串
    pub fn is_valid_transporter(&self, name: &str) -> bool {
        if name.split_whitespace().count() < 2 {
            return false;
        }

        if !name
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || TRANSPORTER_PUNCTUATION.contains(&c))
        {
            return false;
        }

        if name.chars().any(|c| c.is_numeric()) {
            return false;
        }

        let upper = name.to_uppercase();
        !TRANSPORTER_BLACKLIST
            .iter()
            .any(|keyword| upper.contains(keyword))
    }
}
