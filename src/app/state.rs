// ==========================================
// 运输费率系统 - 应用状态
// ==========================================
// 职责: 启动时一次性导入费率表,持有共享的 API 实例
// 红线: 数据源不可用时启动失败,不以空表继续服务
// ==========================================

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiResult, RateApi};
use crate::config::RateConfigReader;
use crate::importer::{RateImporter, RateSheetImporter, SheetParser, UniversalSheetParser};

/// 应用状态
///
/// 导入完成后只读,可跨线程共享
pub struct AppState {
    /// 费率表文件路径
    pub workbook_path: PathBuf,

    /// 工作表名
    pub sheet_name: String,

    /// 费率API
    pub rate_api: Arc<RateApi>,
}

impl AppState {
    /// 创建新的AppState实例（使用按扩展名分派的解析器）
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(ApiError): 配置缺失、文件不可读、工作表不存在
    pub fn new<C: RateConfigReader>(config: &C) -> ApiResult<Self> {
        Self::with_parser(config, Box::new(UniversalSheetParser))
    }

    /// 使用指定解析器创建AppState
    pub fn with_parser<C: RateConfigReader>(
        config: &C,
        parser: Box<dyn SheetParser>,
    ) -> ApiResult<Self> {
        let workbook_path = config.get_workbook_path()?;
        let sheet_name = config.get_sheet_name()?;
        tracing::info!(
            path = %workbook_path.display(),
            sheet = %sheet_name,
            "初始化AppState"
        );

        let importer = RateSheetImporter::new(
            parser,
            config.get_label_column()?,
            config.get_title_case_transporters()?,
        );
        let (rate_table, report) = importer.import_from_file(&workbook_path, &sheet_name)?;

        if rate_table.is_empty() {
            tracing::warn!("费率表未解析出任何记录，所有查询都将无结果");
        }

        let rate_api = RateApi::new(rate_table, Some(report), config.get_top_n()?);

        tracing::info!("AppState初始化成功");
        Ok(Self {
            workbook_path,
            sheet_name,
            rate_api: Arc::new(rate_api),
        })
    }
}
