// ==========================================
// 零售进货预测 - 导入层
// ==========================================
// 职责: 外部数据导入,生成 SalesRecord
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod columns;
pub mod data_cleaner;
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod forecast_importer_trait;
pub mod sales_importer;
pub mod schema_validator;

// 重导出核心类型
pub use data_cleaner::DataCleaner as DataCleanerImpl;
pub use error::{ImportError, ImportResult};
pub use field_mapper::FieldMapper as FieldMapperImpl;
pub use file_parser::{CsvParser, ExcelParser, UniversalFileParser};
pub use sales_importer::{ImportedSales, SalesImporter};
pub use schema_validator::SchemaValidator;

// 重导出 Trait 接口
pub use forecast_importer_trait::{DataCleaner, FieldMapper, FileParser, NumericCell, RawRow, RawTable};
