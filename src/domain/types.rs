// ==========================================
// 运输费率系统 - 领域类型定义
// ==========================================
// 职责: 行类型、解析阶段等封闭枚举
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 行类型 (Row Kind)
// ==========================================
// 由行分类器产出,解析驱动器据此推进状态
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowKind {
    TransporterName,               // 运输商名称行
    WeightOnlyHeader,              // 拆分表头上半行（仅 "WEIGHT"）
    CapacityHeader,                // 拆分表头下半行（含 "CAPACITY"）
    CompositeWeightCapacityHeader, // 单行组合表头
    DataRow,                       // 费率数据行
    Skip,                          // 空行/杂项文本
}

impl RowKind {
    /// 是否为表头类行（含拆分表头的任意一半）
    pub fn is_header(&self) -> bool {
        matches!(
            self,
            RowKind::WeightOnlyHeader
                | RowKind::CapacityHeader
                | RowKind::CompositeWeightCapacityHeader
        )
    }
}

impl fmt::Display for RowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKind::TransporterName => write!(f, "TRANSPORTER_NAME"),
            RowKind::WeightOnlyHeader => write!(f, "WEIGHT_ONLY_HEADER"),
            RowKind::CapacityHeader => write!(f, "CAPACITY_HEADER"),
            RowKind::CompositeWeightCapacityHeader => write!(f, "COMPOSITE_WEIGHT_CAPACITY_HEADER"),
            RowKind::DataRow => write!(f, "DATA_ROW"),
            RowKind::Skip => write!(f, "SKIP"),
        }
    }
}

// ==========================================
// 解析阶段 (Ingest Phase)
// ==========================================
// 由 ParseState 派生,不单独存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IngestPhase {
    Idle,                // 尚未识别到运输商
    InTransporterBlock,  // 运输商费率块内
    AwaitingCapacityRow, // 已见 WEIGHT 行,等待 CAPACITY 行
}

impl fmt::Display for IngestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestPhase::Idle => write!(f, "IDLE"),
            IngestPhase::InTransporterBlock => write!(f, "IN_TRANSPORTER_BLOCK"),
            IngestPhase::AwaitingCapacityRow => write!(f, "AWAITING_CAPACITY_ROW"),
        }
    }
}
