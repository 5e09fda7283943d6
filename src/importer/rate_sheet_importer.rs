// ==========================================
// 运输费率系统 - 费率表导入器（解析驱动器）
// ==========================================
// 职责: 单遍逐行扫描,维护解析状态,串联 分类 → 表头 → 提取
// 流程: 读取工作表 → 行分类 → 更新表头/运输商 → 数据行提取 → 费率表
// 红线: 行含义只取决于之前的行,不回溯;解析问题不上抛
// ==========================================

use crate::domain::rate::{ImportReport, RawRow};
use crate::domain::types::{IngestPhase, RowKind};
use crate::importer::error::ImportResult;
use crate::importer::header_resolver::{HeaderResolver, ResolvedHeaders};
use crate::importer::importer_trait::{RateImporter, SheetParser};
use crate::importer::record_extractor::RecordExtractor;
use crate::importer::row_classifier::{ClassifyContext, RowClassifier};
use crate::repository::RateTable;
use chrono::Utc;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, instrument};
use uuid::Uuid;

// ==========================================
// ParseState - 解析状态
// ==========================================
// 每次导入独占一个实例,新运输商使之前的表头失效
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseState {
    pub current_transporter: Option<String>,
    pub active_headers: Option<ResolvedHeaders>,
    pub pending_weight_row: Option<usize>, // 行在输入切片中的位置
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前阶段（由字段派生）
    pub fn phase(&self) -> IngestPhase {
        if self.pending_weight_row.is_some() {
            IngestPhase::AwaitingCapacityRow
        } else if self.current_transporter.is_some() {
            IngestPhase::InTransporterBlock
        } else {
            IngestPhase::Idle
        }
    }

    /// 运输商与非空表头均已就绪
    pub fn block_ready(&self) -> bool {
        self.current_transporter.is_some()
            && self.active_headers.as_ref().is_some_and(|h| !h.is_empty())
    }

    fn classify_context(&self) -> ClassifyContext {
        ClassifyContext {
            awaiting_capacity: self.pending_weight_row.is_some(),
            block_ready: self.block_ready(),
        }
    }

    fn enter_transporter(&mut self, name: &str) {
        self.current_transporter = Some(name.to_string());
        self.active_headers = None;
        self.pending_weight_row = None;
    }
}

// ==========================================
// RowTally - 行统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RowTally {
    transporter_blocks: usize,
    header_rows: usize,
    data_rows: usize,
    skipped_rows: usize,
}

impl RowTally {
    fn count(&mut self, kind: RowKind) {
        match kind {
            RowKind::TransporterName => self.transporter_blocks += 1,
            RowKind::DataRow => self.data_rows += 1,
            RowKind::Skip => self.skipped_rows += 1,
            k if k.is_header() => self.header_rows += 1,
            _ => {}
        }
    }
}

// ==========================================
// RateSheetImporter - 费率表导入器
// ==========================================
pub struct RateSheetImporter {
    parser: Box<dyn SheetParser>,
    classifier: RowClassifier,
    header_resolver: HeaderResolver,
    extractor: RecordExtractor,
    label_column: usize,
}

impl RateSheetImporter {
    /// 创建导入器
    ///
    /// # 参数
    /// - parser: 文件解析器
    /// - label_column: 标签列（默认 1,即 B 列）
    /// - title_case_transporters: 运输商名称是否首字母大写输出
    pub fn new(
        parser: Box<dyn SheetParser>,
        label_column: usize,
        title_case_transporters: bool,
    ) -> Self {
        Self {
            parser,
            classifier: RowClassifier,
            header_resolver: HeaderResolver::new(label_column),
            extractor: RecordExtractor::new(label_column, title_case_transporters),
            label_column,
        }
    }

    /// 处理单行,推进解析状态
    ///
    /// # 参数
    /// - rows: 全部输入行（拆分表头需回看 WEIGHT 行）
    /// - position: 当前行在 rows 中的位置
    /// - state: 解析状态
    /// - table: 输出费率表
    ///
    /// # 返回
    /// - 本行的分类结果（position 越界时为 Skip,状态不变）
    pub fn process_row(
        &self,
        rows: &[RawRow],
        position: usize,
        state: &mut ParseState,
        table: &mut RateTable,
    ) -> RowKind {
        let Some(row) = rows.get(position) else {
            return RowKind::Skip;
        };
        let label = row.label_cell(self.label_column);
        let kind = self.classifier.classify(label, state.classify_context());

        match kind {
            RowKind::TransporterName => {
                info!(transporter = %label, row = row.index, "识别到运输商");
                state.enter_transporter(label);
            }
            RowKind::WeightOnlyHeader => {
                debug!(row = row.index, "识别到拆分表头 WEIGHT 行");
                state.pending_weight_row = Some(position);
            }
            RowKind::CapacityHeader => {
                if let Some(prior) = state.pending_weight_row.take().and_then(|p| rows.get(p)) {
                    let headers = self.header_resolver.resolve_split_headers(prior, row);
                    debug!(
                        row = row.index,
                        weight_row = prior.index,
                        columns = headers.len(),
                        "拆分表头解析完成"
                    );
                    state.active_headers = Some(headers);
                }
            }
            RowKind::CompositeWeightCapacityHeader => {
                let headers = self.header_resolver.resolve_single_row_headers(row);
                debug!(row = row.index, columns = headers.len(), "单行表头解析完成");
                state.active_headers = Some(headers);
            }
            RowKind::DataRow => {
                if let (Some(transporter), Some(headers)) =
                    (&state.current_transporter, &state.active_headers)
                {
                    table.extend(self.extractor.extract(row, transporter, headers));
                }
            }
            RowKind::Skip => {
                if !row.is_blank() {
                    debug!(row = row.index, label = %label, "跳过行");
                }
            }
        }

        kind
    }

    fn scan(&self, rows: &[RawRow]) -> (RateTable, RowTally) {
        let mut state = ParseState::new();
        let mut table = RateTable::new();
        let mut tally = RowTally::default();

        for position in 0..rows.len() {
            let kind = self.process_row(rows, position, &mut state, &mut table);
            tally.count(kind);
        }

        (table, tally)
    }
}

impl RateImporter for RateSheetImporter {
    #[instrument(skip(self), fields(batch_id))]
    fn import_from_file(
        &self,
        file_path: &Path,
        sheet_name: &str,
    ) -> ImportResult<(RateTable, ImportReport)> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        info!(path = %file_path.display(), sheet = %sheet_name, "开始导入费率表");

        let rows = self.parser.read_rows(file_path, sheet_name)?;
        let (table, tally) = self.scan(&rows);

        let report = ImportReport {
            batch_id,
            source_path: file_path.display().to_string(),
            sheet_name: sheet_name.to_string(),
            imported_at: Utc::now(),
            total_rows: rows.len(),
            transporter_blocks: tally.transporter_blocks,
            header_rows: tally.header_rows,
            data_rows: tally.data_rows,
            skipped_rows: tally.skipped_rows,
            record_count: table.len(),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        info!(
            total_rows = report.total_rows,
            transporters = report.transporter_blocks,
            records = report.record_count,
            elapsed_ms = report.elapsed_ms,
            "费率表导入完成"
        );

        Ok((table, report))
    }

    fn import_rows(&self, rows: &[RawRow]) -> RateTable {
        self.scan(rows).0
    }
}
