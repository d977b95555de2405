// ==========================================
// 零售进货预测 - 导出层错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("无法创建输出文件: {path}: {message}")]
    CreateFailed { path: String, message: String },

    #[error("CSV 写入失败: {0}")]
    CsvWriteError(#[from] csv::Error),

    #[error("输出刷新失败: {0}")]
    FlushError(#[from] std::io::Error),
}

pub type ExportResult<T> = Result<T, ExportError>;
