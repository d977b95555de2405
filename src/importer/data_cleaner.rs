// ==========================================
// 零售进货预测 - 数据清洗器实现
// ==========================================
// 职责: NULL 标准化（含 TRIM）/ 数值强制转换
// 红线: 非数值单元格视为缺失，不得当作 0
// ==========================================

use crate::importer::forecast_importer_trait::{DataCleaner as DataCleanerTrait, NumericCell};

pub struct DataCleaner;

impl DataCleanerTrait for DataCleaner {
    fn normalize_null(&self, value: Option<&str>) -> Option<String> {
        value.and_then(|v| {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
    }

    fn coerce_numeric(&self, value: Option<&str>) -> NumericCell {
        let text = match self.normalize_null(value) {
            Some(t) => t,
            None => return NumericCell::Missing,
        };

        // Excel 导出的占位符按空白处理
        if matches!(text.as_str(), "-" | "NaN" | "nan" | "#N/A") {
            return NumericCell::Missing;
        }

        match text.parse::<f64>() {
            Ok(v) if v.is_finite() => NumericCell::Value(v),
            _ => NumericCell::Invalid(text),
        }
    }
}
