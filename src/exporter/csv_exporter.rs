// ==========================================
// 零售进货预测 - CSV 结果导出
// ==========================================
// 列名与列序由 ForecastRow / ProductRollupRow 的 serde 重命名决定
// 行序与输入一致（SKU 首次出现顺序），输出字节可复现
// ==========================================

use crate::domain::forecast::{ForecastRow, ProductRollupRow};
use crate::exporter::error::{ExportError, ExportResult};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::{info, instrument};

/// SKU 结果表写入任意 io::Write
pub fn write_forecast_to_writer<W: Write>(writer: W, rows: &[ForecastRow]) -> ExportResult<()> {
    write_rows(writer, rows)
}

/// 商品汇总表写入任意 io::Write
pub fn write_rollup_to_writer<W: Write>(writer: W, rows: &[ProductRollupRow]) -> ExportResult<()> {
    write_rows(writer, rows)
}

/// SKU 结果表写入文件
#[instrument(skip(rows), fields(path = %path.as_ref().display(), rows = rows.len()))]
pub fn write_forecast_csv<P: AsRef<Path>>(path: P, rows: &[ForecastRow]) -> ExportResult<()> {
    let file = create_file(path.as_ref())?;
    write_rows(file, rows)?;
    info!("SKU 结果表已写出");
    Ok(())
}

/// 商品汇总表写入文件
#[instrument(skip(rows), fields(path = %path.as_ref().display(), rows = rows.len()))]
pub fn write_rollup_csv<P: AsRef<Path>>(path: P, rows: &[ProductRollupRow]) -> ExportResult<()> {
    let file = create_file(path.as_ref())?;
    write_rows(file, rows)?;
    info!("商品汇总表已写出");
    Ok(())
}

fn create_file(path: &Path) -> ExportResult<File> {
    File::create(path).map_err(|e| ExportError::CreateFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

fn write_rows<W: Write, T: Serialize>(writer: W, rows: &[T]) -> ExportResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
