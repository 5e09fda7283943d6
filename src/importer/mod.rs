// ==========================================
// 运输费率系统 - 导入层
// ==========================================
// 职责: 半结构化费率表 → 扁平费率记录
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod data_cleaner;
pub mod error;
pub mod file_parser;
pub mod header_resolver;
pub mod importer_trait;
pub mod rate_sheet_importer;
pub mod record_extractor;
pub mod row_classifier;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvSheetParser, ExcelSheetParser, UniversalSheetParser};
pub use header_resolver::{HeaderResolver, ResolvedHeaders};
pub use rate_sheet_importer::{ParseState, RateSheetImporter};
pub use record_extractor::RecordExtractor;
pub use row_classifier::{ClassifyContext, RowClassifier};

// 重导出 Trait 接口
pub use importer_trait::{DataCleaner, RateImporter, SheetParser};
