// ==========================================
// 零售进货预测 - 导入 Trait
// ==========================================
// 职责: 定义导入管道各阶段接口（不包含实现）
// 阶段: 0 文件解析 → 1 结构校验 → 2 清洗 → 3 字段映射
// ==========================================

use crate::domain::quality::DqViolation;
use crate::domain::sales::SalesRecord;
use crate::importer::error::ImportResult;
use std::collections::HashMap;
use std::path::Path;

// ==========================================
// RawTable - 解析后的原始表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    pub row_number: usize, // 文件行号（表头为第 1 行）
    pub values: HashMap<String, String>,
}

// ==========================================
// NumericCell - 数值单元格清洗结果
// ==========================================
#[derive(Debug, Clone, PartialEq)]
pub enum NumericCell {
    Value(f64),
    Missing,         // 空白
    Invalid(String), // 非数值，保留原文用于 DQ 报告
}

impl NumericCell {
    /// 非数值一律视为缺失，不当作 0
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericCell::Value(v) => Some(*v),
            _ => None,
        }
    }
}

// ==========================================
// FileParser Trait
// ==========================================
// 用途: 文件解析接口（阶段 0）
// 实现者: CsvParser, ExcelParser
pub trait FileParser: Send + Sync {
    /// 解析文件为原始表（表头 + 行记录）
    ///
    /// # 返回
    /// - Ok(RawTable): 已跳过完全空白的行
    /// - Err: 文件读取错误、格式错误
    fn parse_to_raw_table(&self, file_path: &Path) -> ImportResult<RawTable>;
}

// ==========================================
// DataCleaner Trait
// ==========================================
// 用途: 数据清洗接口（阶段 2）
pub trait DataCleaner: Send + Sync {
    /// 标准化 NULL 值（空字符串/空白 → None）
    fn normalize_null(&self, value: Option<&str>) -> Option<String>;

    /// 数值强制转换
    ///
    /// # 返回
    /// - Value: 可解析的有限数值
    /// - Missing: 空白或缺列
    /// - Invalid: 非数值文本
    fn coerce_numeric(&self, value: Option<&str>) -> NumericCell;
}

// ==========================================
// FieldMapper Trait
// ==========================================
// 用途: 字段映射接口（阶段 3）
pub trait FieldMapper: Send + Sync {
    /// 将原始行映射为 SalesRecord
    ///
    /// # 返回
    /// - (Some(record), violations): 映射成功，附带已按默认值处理的问题
    /// - (None, violations): 行无法归属（如 SKU ID 缺失），被丢弃
    fn map_to_sales_record(&self, row: &RawRow) -> (Option<SalesRecord>, Vec<DqViolation>);
}
