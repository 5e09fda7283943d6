// ==========================================
// 费率表导入 集成测试
// ==========================================
// 测试目标: xlsx / csv → 解析驱动器 → 费率表 的完整流程
// ==========================================


use std::path::Path;
use test_helpers::{create_test_csv, create_test_workbook, SAMPLE_SHEET, SAMPLE_SHEET_NAME};
use transport_rates::importer::{
    ExcelSheetParser, ImportError, RateImporter, RateSheetImporter, SheetParser,
    UniversalSheetParser,
};
use transport_rates::logging;
use transport_rates::RateRecord;

fn create_importer() -> RateSheetImporter {
    RateSheetImporter::new(Box::new(UniversalSheetParser), 1, true)
}

fn record(transporter: &str, weight: &str, location: &str, rate: f64) -> RateRecord {
    RateRecord {
        transporter: transporter.to_string(),
        weight_label: weight.to_string(),
        location: location.to_string(),
        rate,
    }
}

#[test]
fn test_split_header_scenario_from_xlsx() {
    logging::init_test();

    let sheet: &[&[&str]] = &[
        &["", "XYZ TRANSPORT", ""],
        &["", "WEIGHT", "Delhi"],
        &["", "CAPACITY", "Direct"],
        &["", "100 Kg", "450"],
    ];
    let (_dir, path) = create_test_workbook(&[("Rates", sheet)]).unwrap();

    let (table, report) = create_importer().import_from_file(&path, "Rates").unwrap();

    assert_eq!(
        table.records(),
        &[record("Xyz Transport", "100 Kg", "Delhi Direct", 450.0)]
    );
    assert_eq!(report.record_count, 1);
    assert_eq!(report.sheet_name, "Rates");
    assert!(!report.batch_id.is_empty());
}

#[test]
fn test_sample_sheet_from_xlsx() {
    logging::init_test();

    let (_dir, path) = create_test_workbook(&[(SAMPLE_SHEET_NAME, SAMPLE_SHEET)]).unwrap();

    let (table, report) = create_importer()
        .import_from_file(&path, SAMPLE_SHEET_NAME)
        .unwrap();

    assert_eq!(table.len(), 18);
    assert_eq!(report.total_rows, 19);
    assert_eq!(report.transporter_blocks, 3);
    assert_eq!(report.header_rows, 5);
    assert_eq!(report.data_rows, 7);
    assert_eq!(report.skipped_rows, 4);

    assert_eq!(
        table.transporters(),
        vec!["Abc Logistics", "Shree Ganesh Roadways", "Xyz Transport"]
    );
    assert_eq!(
        table.weight_labels(),
        vec!["100 Kg", "Extra 5 Km", "Upto 50 Kg"]
    );
    assert_eq!(
        table.locations(),
        vec!["Delhi Direct", "Loc_5", "Mumbai", "Nagpur", "Pune", "Surat"]
    );
}

#[test]
fn test_sample_sheet_ranking() {
    let (_dir, path) = create_test_workbook(&[(SAMPLE_SHEET_NAME, SAMPLE_SHEET)]).unwrap();
    let (table, _) = create_importer()
        .import_from_file(&path, SAMPLE_SHEET_NAME)
        .unwrap();

    // 同价 430 按插入顺序
    let quotes = table.query("Upto 50 Kg", "Delhi Direct");
    let ranked: Vec<(&str, f64)> = quotes
        .iter()
        .map(|q| (q.transporter.as_str(), q.rate))
        .collect();
    assert_eq!(
        ranked,
        vec![
            ("Abc Logistics", 430.0),
            ("Shree Ganesh Roadways", 430.0),
            ("Xyz Transport", 450.0),
        ]
    );

    let pune = table.query("UPTO 50 KG", "pune");
    let rates: Vec<f64> = pune.iter().map(|q| q.rate).collect();
    assert_eq!(rates, vec![505.0, 510.0, 520.0]);

    let nagpur = table.query("100 Kg", "Nagpur");
    assert_eq!(nagpur.len(), 1);
    assert_eq!(nagpur[0].rate, 750.5);

    // "N/A" 单元格不产生记录
    assert!(table.query("100 Kg", "Mumbai").is_empty());
}

#[test]
fn test_csv_and_xlsx_produce_same_table() {
    let (_xlsx_dir, xlsx) = create_test_workbook(&[(SAMPLE_SHEET_NAME, SAMPLE_SHEET)]).unwrap();
    let (_csv_dir, csv) = create_test_csv(SAMPLE_SHEET).unwrap();

    let importer = create_importer();
    let (from_xlsx, _) = importer.import_from_file(&xlsx, SAMPLE_SHEET_NAME).unwrap();
    let (from_csv, _) = importer.import_from_file(&csv, SAMPLE_SHEET_NAME).unwrap();

    assert_eq!(from_xlsx, from_csv);
}

#[test]
fn test_only_named_sheet_is_ingested() {
    let other: &[&[&str]] = &[
        &["", "Other Carrier Group", ""],
        &["", "Weight (Kg)", "Agra"],
        &["", "100 Kg", "100"],
    ];
    let (_dir, path) =
        create_test_workbook(&[("Summary", other), (SAMPLE_SHEET_NAME, SAMPLE_SHEET)]).unwrap();

    let (table, _) = create_importer()
        .import_from_file(&path, SAMPLE_SHEET_NAME)
        .unwrap();

    assert!(table.query("100 Kg", "Agra").is_empty());
    assert_eq!(table.len(), 18);
}

#[test]
fn test_missing_sheet_is_fatal() {
    let (_dir, path) = create_test_workbook(&[("Sheet1", SAMPLE_SHEET)]).unwrap();

    let result = create_importer().import_from_file(&path, SAMPLE_SHEET_NAME);

    match result {
        Err(ImportError::SheetNotFound { sheet, available }) => {
            assert_eq!(sheet, SAMPLE_SHEET_NAME);
            assert_eq!(available, vec!["Sheet1".to_string()]);
        }
        other => panic!("expected SheetNotFound, got {:?}", other.map(|(t, _)| t.len())),
    }
}

#[test]
fn test_missing_file_is_fatal() {
    let result = create_importer().import_from_file(Path::new("/nonexistent/rates.xlsx"), "X");
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_excel_rows_are_aligned_to_column_a() {
    // A 列与首行均为空: calamine 区域从 B2 开始
    let sheet: &[&[&str]] = &[
        &["", "", ""],
        &["", "Fast Movers", ""],
        &["", "100 Kg", "450"],
    ];
    let (_dir, path) = create_test_workbook(&[("Rates", sheet)]).unwrap();

    let rows = ExcelSheetParser.read_rows(&path, "Rates").unwrap();

    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[0].cell(0), Some(""));
    assert_eq!(rows[0].cell(1), Some("Fast Movers"));
    assert_eq!(rows[1].cell(2), Some("450"));
}

#[test]
fn test_malformed_sheet_degrades_to_empty_table() {
    let sheet: &[&[&str]] = &[
        &["", "Notes: rev 2024", "here"],
        &["", "100 Kg", "450"],
        &["", "CAPACITY", "Delhi"],
    ];
    let (_dir, path) = create_test_workbook(&[("Rates", sheet)]).unwrap();

    let (table, report) = create_importer().import_from_file(&path, "Rates").unwrap();

    assert!(table.is_empty());
    assert_eq!(report.skipped_rows, 3);
}
