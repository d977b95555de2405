// ==========================================
// 销售数据导入集成测试
// ==========================================
// 测试目标: 文件解析 + 结构校验 + 字段映射
// ==========================================


use intake_forecast::api::{ApiError, ForecastApi};
use intake_forecast::importer::{ImportError, SalesImporter};
use intake_forecast::{DqLevel, Period};
use std::io::Write;
use test_helpers::{default_params, write_csv, write_sales_csv, SalesRow};

#[test]
fn test_schema_error_lists_all_missing_columns() {
    let file = write_csv(
        "SKU ID,Fin Year,Week,Actual Sales Units",
        &["A,2025,1,5".to_string()],
    );

    let result = ForecastApi::default().forecast_file(file.path(), &default_params());

    match result {
        Err(ApiError::Import(ImportError::MissingColumns(cols))) => {
            assert_eq!(
                cols,
                vec![
                    "Actual EOW Stock Units",
                    "Actual Sales Margin %",
                    "Actual Intake Units",
                    "Expected Intake Units",
                    "Actual Current Stock Units",
                ]
            );
        }
        other => panic!("Expected MissingColumns, got {:?}", other.map(|r| r.rows.len())),
    }
}

#[test]
fn test_unsupported_extension_rejected() {
    let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    writeln!(file, "SKU ID").unwrap();

    let result = SalesImporter::default().import_file(file.path());
    assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
}

#[test]
fn test_missing_file_rejected() {
    let result = SalesImporter::default().import_file("/nonexistent/sales.csv");
    assert!(matches!(result, Err(ImportError::FileNotFound(_))));
}

#[test]
fn test_rows_mapped_with_row_level_quality() {
    let rows = vec![
        SalesRow::new("A", 202503, 5.0, 10.0).current_stock(7.0),
        SalesRow::new("", 202503, 5.0, 10.0),
        SalesRow::new("B", 202504, 1.0, 1.0).margin("abc"),
    ];
    let file = write_sales_csv(&rows);

    let imported = SalesImporter::default().import_file(file.path()).unwrap();

    assert_eq!(imported.total_rows, 3);
    assert_eq!(imported.records.len(), 2);

    let a = &imported.records[0];
    assert_eq!(a.sku_id, "A");
    assert_eq!(a.period, Some(Period::new(202503)));
    assert_eq!(a.current_stock_units, 7.0);
    assert_eq!(a.margin, Some(0.4));
    assert_eq!(a.attributes.brand, "Acme");
    assert_eq!(a.attributes.price, Some(100.0));

    let b = &imported.records[1];
    assert_eq!(b.margin, None);

    assert!(imported
        .violations
        .iter()
        .any(|v| v.level == DqLevel::Error && v.row_number == Some(3)));
    assert!(imported
        .violations
        .iter()
        .any(|v| v.level == DqLevel::Info && v.field == "Actual Sales Margin %"));
}

#[test]
fn test_non_numeric_sales_missing_and_blank_intake_zero() {
    let header = "Fin Year,Week,SKU ID,Actual Sales Units,Actual EOW Stock Units,\
Actual Sales Margin %,Actual Intake Units,Expected Intake Units,Actual Current Stock Units";
    let file = write_csv(header, &["2025,3,A,lots,10,0.4,,0,2".to_string()]);

    let imported = SalesImporter::default().import_file(file.path()).unwrap();

    let record = &imported.records[0];
    assert_eq!(record.sales_units, None);
    assert_eq!(record.actual_intake_units, 0.0);
    assert!(imported
        .violations
        .iter()
        .any(|v| v.level == DqLevel::Warning && v.field == "Actual Sales Units"));
    assert!(imported
        .violations
        .iter()
        .any(|v| v.level == DqLevel::Info && v.field == "Actual Intake Units"));
}

#[test]
fn test_excel_style_float_periods_accepted() {
    let header = "Fin Year,Week,SKU ID,Actual Sales Units,Actual EOW Stock Units,\
Actual Sales Margin %,Actual Intake Units,Expected Intake Units,Actual Current Stock Units";
    let file = write_csv(header, &["2025.0,7.0,A,1,1,0.4,0,0,0".to_string()]);

    let imported = SalesImporter::default().import_file(file.path()).unwrap();
    assert_eq!(imported.records[0].period, Some(Period::new(202507)));
}

#[test]
fn test_excel_rows_numbered_from_sheet_position() {
    // 工作表前两行为空，表头位于第 3 行，数据位于第 4-5 行
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/sales_offset_header.xlsx");

    let imported = SalesImporter::default().import_file(&path).unwrap();

    assert_eq!(imported.total_rows, 2);
    assert_eq!(imported.records.len(), 2);
    let first = &imported.records[0];
    assert_eq!(first.sku_id, "A");
    assert_eq!(first.row_number, 4);
    assert_eq!(first.period, Some(Period::new(202501)));
    assert_eq!(first.sales_units, Some(10.0));
    assert_eq!(imported.records[1].sales_units, None);
    assert_eq!(imported.records[1].current_stock_units, 6.0);

    let blank_sales = imported
        .violations
        .iter()
        .find(|v| v.field == "Actual Sales Units")
        .expect("blank sales cell should be reported");
    assert_eq!(blank_sales.level, DqLevel::Info);
    assert_eq!(blank_sales.row_number, Some(5));
}
