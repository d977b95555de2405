// ==========================================
// 零售进货预测 - 导出层
// ==========================================
// 职责: 结果表输出（CSV）
// ==========================================

pub mod csv_exporter;
pub mod error;

pub use csv_exporter::{
    write_forecast_csv, write_forecast_to_writer, write_rollup_csv, write_rollup_to_writer,
};
pub use error::{ExportError, ExportResult};
