// ==========================================
// 零售进货预测 - 销售数据导入器
// ==========================================
// 职责: 整合导入流程，从文件/原始表到 SalesRecord 列表
// 流程: 解析 → 结构校验 → 清洗 + 映射 → DQ 汇总
// ==========================================

use crate::domain::quality::DqViolation;
use crate::domain::sales::SalesRecord;
use crate::importer::error::ImportResult;
use crate::importer::field_mapper::FieldMapper as FieldMapperImpl;
use crate::importer::file_parser::UniversalFileParser;
use crate::importer::forecast_importer_trait::{FieldMapper, RawTable};
use crate::importer::schema_validator::SchemaValidator;
use std::path::Path;
use std::time::Instant;
use tracing::{info, instrument, warn};

// ==========================================
// ImportedSales - 导入结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ImportedSales {
    pub records: Vec<SalesRecord>,
    pub violations: Vec<DqViolation>,
    pub total_rows: usize,
    pub elapsed_time: std::time::Duration,
}

// ==========================================
// SalesImporter
// ==========================================
pub struct SalesImporter {
    file_parser: UniversalFileParser,
    schema_validator: SchemaValidator,
    field_mapper: Box<dyn FieldMapper>,
}

impl Default for SalesImporter {
    fn default() -> Self {
        Self::new(Box::new(FieldMapperImpl::new()))
    }
}

impl SalesImporter {
    pub fn new(field_mapper: Box<dyn FieldMapper>) -> Self {
        Self {
            file_parser: UniversalFileParser,
            schema_validator: SchemaValidator,
            field_mapper,
        }
    }

    /// 从文件导入（.csv / .xlsx / .xls）
    ///
    /// # 返回
    /// - Ok(ImportedSales): 记录 + 行级 DQ
    /// - Err: 文件错误或缺少必需列（整批失败）
    #[instrument(skip(self, file_path), fields(path = %file_path.as_ref().display()))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportedSales> {
        let table = self.file_parser.parse(file_path)?;
        self.import_table(&table)
    }

    /// 从已解析的原始表导入
    pub fn import_table(&self, table: &RawTable) -> ImportResult<ImportedSales> {
        let start_time = Instant::now();

        // 阶段 1: 结构校验（先于任何计算）
        self.schema_validator.validate_columns(&table.headers)?;

        // 阶段 2-3: 清洗 + 映射
        let mut records = Vec::with_capacity(table.rows.len());
        let mut violations = Vec::new();
        for row in &table.rows {
            let (record, row_violations) = self.field_mapper.map_to_sales_record(row);
            violations.extend(row_violations);
            if let Some(record) = record {
                records.push(record);
            }
        }

        let dropped = table.rows.len() - records.len();
        if dropped > 0 {
            warn!(dropped, "部分行无法归属 SKU，已丢弃");
        }

        let elapsed_time = start_time.elapsed();
        info!(
            total_rows = table.rows.len(),
            accepted = records.len(),
            violations = violations.len(),
            elapsed_ms = elapsed_time.as_millis() as u64,
            "销售数据导入完成"
        );

        Ok(ImportedSales {
            records,
            violations,
            total_rows: table.rows.len(),
            elapsed_time,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::error::ImportError;
    use crate::importer::file_parser::CsvParser;

    const HEADER: &str = "SKU ID,Fin Year,Week,Actual Sales Units,Actual EOW Stock Units,\
Actual Sales Margin %,Actual Intake Units,Expected Intake Units,Actual Current Stock Units";

    #[test]
    fn test_import_table_maps_rows() {
        let csv = format!("{}\nA,2025,1,5,10,0.4,0,0,10\n,2025,2,5,10,0.4,0,0,10\n", HEADER);
        let table = CsvParser.parse_reader(csv.as_bytes()).unwrap();

        let imported = SalesImporter::default().import_table(&table).unwrap();

        assert_eq!(imported.total_rows, 2);
        assert_eq!(imported.records.len(), 1);
        assert_eq!(imported.violations.len(), 1);
    }

    #[test]
    fn test_absurd_fin_year_gives_missing_period() {
        let csv = format!("{}\nA,1e17,1,10,10,0.4,0,0,0\n", HEADER);
        let table = CsvParser.parse_reader(csv.as_bytes()).unwrap();

        let imported = SalesImporter::default().import_table(&table).unwrap();

        assert_eq!(imported.records.len(), 1);
        assert_eq!(imported.records[0].period, None);
        assert!(imported
            .violations
            .iter()
            .any(|v| v.field == "YearWeek" && v.row_number == Some(2)));
    }

    #[test]
    fn test_import_table_schema_failure() {
        let csv = "SKU ID,Fin Year,Week\nA,2025,1\n";
        let table = CsvParser.parse_reader(csv.as_bytes()).unwrap();

        let result = SalesImporter::default().import_table(&table);
        assert!(matches!(result, Err(ImportError::MissingColumns(cols)) if cols.len() == 6));
    }
}
