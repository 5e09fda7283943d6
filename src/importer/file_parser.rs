// ==========================================
// 运输费率系统 - 文件解析器实现
// ==========================================
// 阶段 0: 文件读取与解析
// 支持: Excel (.xlsx/.xlsm/.xls/.xlsb/.ods) / CSV (.csv)
// 约定: 输出行的 cells[0] 始终对应 A 列,无表头行
// ==========================================

use crate::domain::rate::RawRow;
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::SheetParser;
use calamine::{open_workbook_auto, Data, Range, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::debug;

const EXCEL_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xls", "xlsb", "ods"];

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// CSV Parser 实现
// ==========================================
// 单工作表的 CSV 导出,sheet_name 不参与
pub struct CsvSheetParser;

impl SheetParser for CsvSheetParser {
    fn read_rows(&self, file_path: &Path, _sheet_name: &str) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let record = result?;
            let cells = record.iter().map(str::to_string).collect();
            rows.push(RawRow::new(row_idx, cells));
        }

        debug!(rows = rows.len(), path = %file_path.display(), "CSV 读取完成");
        Ok(rows)
    }
}

// ==========================================
// Excel Parser 实现
// ==========================================
pub struct ExcelSheetParser;

impl SheetParser for ExcelSheetParser {
    fn read_rows(&self, file_path: &Path, sheet_name: &str) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        let sheet_names = workbook.sheet_names();
        if !sheet_names.iter().any(|name| name == sheet_name) {
            return Err(ImportError::SheetNotFound {
                sheet: sheet_name.to_string(),
                available: sheet_names,
            });
        }

        let range = workbook.worksheet_range(sheet_name)?;
        let rows = range_to_rows(&range);

        debug!(
            rows = rows.len(),
            sheet = %sheet_name,
            path = %file_path.display(),
            "Excel 读取完成"
        );
        Ok(rows)
    }
}

/// 将 calamine 区域展开为按物理行列对齐的行
///
/// calamine 的区域从首个非空单元格开始,这里补齐左侧空列并保留起始行号,
/// 使 cells[0] 始终对应 A 列。
fn range_to_rows(range: &Range<Data>) -> Vec<RawRow> {
    let Some((start_row, start_col)) = range.start() else {
        return Vec::new();
    };

    range
        .rows()
        .enumerate()
        .map(|(offset, cells)| {
            let mut values = vec![String::new(); start_col as usize];
            values.extend(cells.iter().map(cell_to_string));
            RawRow::new(start_row as usize + offset, values)
        })
        .collect()
}

/// 单元格文本（数值按表格显示习惯: 450.0 → "450"）
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ==========================================
// 通用文件解析器（根据扩展名自动选择）
// ==========================================
pub struct UniversalSheetParser;

impl SheetParser for UniversalSheetParser {
    fn read_rows(&self, file_path: &Path, sheet_name: &str) -> ImportResult<Vec<RawRow>> {
        let ext = extension_of(file_path);
        match ext.as_str() {
            "csv" => CsvSheetParser.read_rows(file_path, sheet_name),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelSheetParser.read_rows(file_path, sheet_name),
            _ => {
                ensure_exists(file_path)?;
                Err(ImportError::UnsupportedFormat(ext))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_csv_parser_keeps_column_positions() {
        let mut temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        writeln!(temp_file, ",XYZ TRANSPORT,,").unwrap();
        writeln!(temp_file, ",WEIGHT,Delhi,Pune").unwrap();
        writeln!(temp_file, ",100 Kg,450").unwrap();

        let rows = CsvSheetParser.read_rows(temp_file.path(), "").unwrap();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].cell(1), Some("XYZ TRANSPORT"));
        assert_eq!(rows[1].cell(3), Some("Pune"));
        assert_eq!(rows[2].len(), 3);
        assert_eq!(rows[2].index, 2);
    }

    #[test]
    fn test_csv_parser_file_not_found() {
        let result = CsvSheetParser.read_rows(Path::new("non_existent.csv"), "");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_excel_parser_rejects_csv_extension() {
        let temp_file = Builder::new().suffix(".csv").tempfile().unwrap();
        let result = ExcelSheetParser.read_rows(temp_file.path(), "Sheet1");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_universal_parser_unsupported_extension() {
        let temp_file = Builder::new().suffix(".txt").tempfile().unwrap();
        let result = UniversalSheetParser.read_rows(temp_file.path(), "Sheet1");
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(ext)) if ext == "txt"));
    }

    #[test]
    fn test_cell_to_string_renders_numbers() {
        assert_eq!(cell_to_string(&Data::Float(450.0)), "450");
        assert_eq!(cell_to_string(&Data::Float(1250.5)), "1250.5");
        assert_eq!(cell_to_string(&Data::Int(12)), "12");
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("Delhi".to_string())), "Delhi");
    }

    #[test]
    fn test_range_to_rows_rebases_to_column_a() {
        let mut range: Range<Data> = Range::new((2, 1), (3, 2));
        range.set_value((2, 1), Data::String("XYZ TRANSPORT".to_string()));
        range.set_value((3, 2), Data::Float(450.0));

        let rows = range_to_rows(&range);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, 2);
        assert_eq!(rows[0].cells, vec!["", "XYZ TRANSPORT", ""]);
        assert_eq!(rows[1].cells, vec!["", "", "450"]);
    }
}
