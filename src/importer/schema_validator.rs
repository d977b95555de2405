// ==========================================
// 零售进货预测 - 结构校验器
// ==========================================
// 阶段 1: 必需列检查
// 红线: 缺任一必需列 → 整批失败，不产生任何结果
// ==========================================

use crate::importer::columns::REQUIRED_COLUMNS;
use crate::importer::error::{ImportError, ImportResult};
use tracing::error;

pub struct SchemaValidator;

impl SchemaValidator {
    /// 校验表头包含全部必需列
    ///
    /// # 返回
    /// - Ok(()): 全部存在
    /// - Err(MissingColumns): 按必需列顺序列出全部缺失列
    pub fn validate_columns(&self, headers: &[String]) -> ImportResult<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !headers.iter().any(|h| h.trim() == **required))
            .map(|c| c.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            error!(missing = ?missing, "输入缺少必需列");
            Err(ImportError::MissingColumns(missing))
        }
    }
}
