// ==========================================
// 零售进货预测 - API层错误类型
// ==========================================
// 职责: 汇总导入/配置/导出各层错误，对外统一为 ApiError
// ==========================================

use crate::config::ConfigError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 各层错误
    // ==========================================
    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("参数配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("结果导出失败: {0}")]
    Export(#[from] ExportError),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// 是否为输入结构错误（缺少必需列）
    pub fn is_schema_error(&self) -> bool {
        matches!(self, ApiError::Import(ImportError::MissingColumns(_)))
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
