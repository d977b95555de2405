// ==========================================
// 零售进货预测 - 数据质量记录
// ==========================================
// 非致命问题只记录、不中断计算
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DqLevel - 数据质量级别
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DqLevel {
    Error,   // 错误（该行被丢弃）
    Warning, // 警告（已按默认值处理）
    Info,    // 提示（仅记录）
}

// ==========================================
// DqViolation - 数据质量违规记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DqViolation {
    pub row_number: Option<usize>, // 原始文件行号（SKU 级问题为 None）
    pub sku_id: Option<String>,    // SKU（如果可解析）
    pub level: DqLevel,            // 违规级别
    pub field: String,             // 违规字段
    pub message: String,           // 违规描述
}

impl DqViolation {
    pub fn row(row_number: usize, sku_id: Option<String>, level: DqLevel, field: &str, message: impl Into<String>) -> Self {
        Self {
            row_number: Some(row_number),
            sku_id,
            level,
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn sku(sku_id: &str, level: DqLevel, field: &str, message: impl Into<String>) -> Self {
        Self {
            row_number: None,
            sku_id: Some(sku_id.to_string()),
            level,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

// ==========================================
// DqSummary - 数据质量汇总
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DqSummary {
    pub total_rows: usize, // 原始数据行数
    pub accepted: usize,   // 进入计算的行数
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
}

impl DqSummary {
    pub fn from_violations(total_rows: usize, accepted: usize, violations: &[DqViolation]) -> Self {
        let count = |level: DqLevel| violations.iter().filter(|v| v.level == level).count();
        Self {
            total_rows,
            accepted,
            errors: count(DqLevel::Error),
            warnings: count(DqLevel::Warning),
            infos: count(DqLevel::Info),
        }
    }
}
