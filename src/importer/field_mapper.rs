// ==========================================
// 零售进货预测 - 字段映射器实现
// ==========================================
// 职责: 源列 → SalesRecord 映射 + 类型转换
// 规则:
// - SKU ID 缺失 → 丢弃该行（ERROR）
// - 财年/周 非数值 → 周期缺失（WARNING），行保留
// - 销量/周末库存 空白 → 缺失（INFO）；非数值 → 缺失（WARNING），该周不参与销量统计
// - 进货/当前库存 空白 → 0（INFO）；非数值 → 0（WARNING）
// - 毛利 空白 → 缺失；非数值 → 缺失（INFO）
// ==========================================

use crate::domain::quality::{DqLevel, DqViolation};
use crate::domain::sales::{ProductAttributes, SalesRecord};
use crate::domain::types::Period;
use crate::importer::columns;
use crate::importer::data_cleaner::DataCleaner;
use crate::importer::forecast_importer_trait::{
    DataCleaner as DataCleanerTrait, FieldMapper as FieldMapperTrait, NumericCell, RawRow,
};

pub struct FieldMapper {
    cleaner: DataCleaner,
}

impl Default for FieldMapper {
    fn default() -> Self {
        Self {
            cleaner: DataCleaner,
        }
    }
}

impl FieldMapperTrait for FieldMapper {
    fn map_to_sales_record(&self, row: &RawRow) -> (Option<SalesRecord>, Vec<DqViolation>) {
        let mut violations = Vec::new();
        let row_number = row.row_number;

        // 主键
        let sku_id = match self.get_string(row, columns::SKU_ID) {
            Some(id) => id,
            None => {
                violations.push(DqViolation::row(
                    row_number,
                    None,
                    DqLevel::Error,
                    columns::SKU_ID,
                    "SKU ID 缺失，该行无法归属",
                ));
                return (None, violations);
            }
        };

        // 周期
        let year = self.numeric(row, columns::FIN_YEAR);
        let week = self.numeric(row, columns::WEEK);
        let period = Period::from_parts(year.value(), week.value());
        if period.is_none() {
            violations.push(DqViolation::row(
                row_number,
                Some(sku_id.clone()),
                DqLevel::Warning,
                "YearWeek",
                format!("财年/周无法组成周期 ({:?}, {:?})，该行不参与周期计算", year, week),
            ));
        }

        let sales_units = self.measure(row, columns::ACTUAL_SALES_UNITS, &sku_id, &mut violations);
        let eow_stock_units =
            self.measure(row, columns::ACTUAL_EOW_STOCK_UNITS, &sku_id, &mut violations);

        let mut quantity = |key: &str| -> f64 {
            self.measure(row, key, &sku_id, &mut violations)
                .unwrap_or(0.0)
        };
        let actual_intake_units = quantity(columns::ACTUAL_INTAKE_UNITS);
        let expected_intake_units = quantity(columns::EXPECTED_INTAKE_UNITS);
        let current_stock_units = quantity(columns::ACTUAL_CURRENT_STOCK_UNITS);

        // 毛利
        let margin = match self.numeric(row, columns::ACTUAL_SALES_MARGIN) {
            NumericCell::Value(v) => Some(v),
            NumericCell::Missing => None,
            NumericCell::Invalid(text) => {
                violations.push(DqViolation::row(
                    row_number,
                    Some(sku_id.clone()),
                    DqLevel::Info,
                    columns::ACTUAL_SALES_MARGIN,
                    format!("毛利非数值 ({})，按缺失处理", text),
                ));
                None
            }
        };

        let record = SalesRecord {
            row_number,
            sku_id,
            period,
            sales_units,
            eow_stock_units,
            actual_intake_units,
            expected_intake_units,
            current_stock_units,
            margin,
            attributes: self.map_attributes(row),
        };

        (Some(record), violations)
    }
}

impl FieldMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// 提取字符串字段，支持多个可能的列名（别名）
    fn get_string(&self, row: &RawRow, key: &str) -> Option<String> {
        let aliases: Vec<&str> = match key {
            columns::CURRENT_RSP => vec![columns::CURRENT_RSP, "Current RSP", "RSP"],
            columns::IMAGE_URL => vec![columns::IMAGE_URL, "Image URL"],
            columns::PRODUCT_URL => vec![columns::PRODUCT_URL, "Product URL"],
            _ => vec![key],
        };

        aliases
            .into_iter()
            .find_map(|alias| self.cleaner.normalize_null(row.values.get(alias).map(|s| s.as_str())))
    }

    fn numeric(&self, row: &RawRow, key: &str) -> NumericCell {
        self.cleaner
            .coerce_numeric(row.values.get(key).map(|s| s.as_str()))
    }

    /// 数量字段: 空白/非数值 → None，并记录 DQ
    fn measure(
        &self,
        row: &RawRow,
        key: &str,
        sku_id: &str,
        violations: &mut Vec<DqViolation>,
    ) -> Option<f64> {
        match self.numeric(row, key) {
            NumericCell::Value(v) => Some(v),
            NumericCell::Missing => {
                violations.push(DqViolation::row(
                    row.row_number,
                    Some(sku_id.to_string()),
                    DqLevel::Info,
                    key,
                    "空白",
                ));
                None
            }
            NumericCell::Invalid(text) => {
                violations.push(DqViolation::row(
                    row.row_number,
                    Some(sku_id.to_string()),
                    DqLevel::Warning,
                    key,
                    format!("非数值 ({})", text),
                ));
                None
            }
        }
    }

    fn map_attributes(&self, row: &RawRow) -> ProductAttributes {
        let text = |key: &str| self.get_string(row, key).unwrap_or_default();
        ProductAttributes {
            product_id: text(columns::PRODUCT_ID),
            brand: text(columns::BRAND),
            department: text(columns::DEPARTMENT),
            category_level_1: text(columns::CATEGORY_LEVEL_1),
            category_level_2: text(columns::CATEGORY_LEVEL_2),
            product: text(columns::PRODUCT),
            size: text(columns::SIZE),
            price: self
                .get_string(row, columns::CURRENT_RSP)
                .and_then(|v| self.cleaner.coerce_numeric(Some(&v)).value()),
            image_url: text(columns::IMAGE_URL),
            product_url: text(columns::PRODUCT_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn raw_row(pairs: &[(&str, &str)]) -> RawRow {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RawRow {
            row_number: 7,
            values,
        }
    }

    fn full_row() -> Vec<(&'static str, &'static str)> {
        vec![
            ("SKU ID", "SKU001"),
            ("Fin Year", "2025"),
            ("Week", "3"),
            ("Actual Sales Units", "12"),
            ("Actual EOW Stock Units", "30"),
            ("Actual Sales Margin %", "0.41"),
            ("Actual Intake Units", "20"),
            ("Expected Intake Units", "5"),
            ("Actual Current Stock Units", "44"),
            ("Product ID", "P01"),
            ("Brand", "Acme"),
            ("Current RSP", "199.99"),
        ]
    }

    #[test]
    fn test_field_mapper_basic() {
        let mapper = FieldMapper::new();
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&full_row()));
        let record = record.unwrap();

        assert!(violations.is_empty());
        assert_eq!(record.sku_id, "SKU001");
        assert_eq!(record.period, Some(Period::new(202503)));
        assert_eq!(record.sales_units, Some(12.0));
        assert_eq!(record.eow_stock_units, Some(30.0));
        assert_eq!(record.margin, Some(0.41));
        assert_eq!(record.current_stock_units, 44.0);
        assert_eq!(record.row_number, 7);
        assert_eq!(record.attributes.product_id, "P01");
        assert_eq!(record.attributes.brand, "Acme");
        // 别名列
        assert_eq!(record.attributes.price, Some(199.99));
        // 缺失描述列默认为空
        assert_eq!(record.attributes.size, "");
    }

    #[test]
    fn test_missing_sku_dropped() {
        let mapper = FieldMapper::new();
        let mut pairs = full_row();
        pairs[0] = ("SKU ID", "  ");
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&pairs));

        assert!(record.is_none());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].level, DqLevel::Error);
    }

    #[test]
    fn test_non_numeric_margin_is_missing_not_zero() {
        let mapper = FieldMapper::new();
        let mut pairs = full_row();
        pairs[5] = ("Actual Sales Margin %", "n/a");
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&pairs));

        assert_eq!(record.unwrap().margin, None);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].level, DqLevel::Info);
    }

    #[test]
    fn test_non_numeric_week_gives_missing_period() {
        let mapper = FieldMapper::new();
        let mut pairs = full_row();
        pairs[2] = ("Week", "wk3");
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&pairs));

        assert_eq!(record.unwrap().period, None);
        assert!(violations
            .iter()
            .any(|v| v.level == DqLevel::Warning && v.field == "YearWeek"));
    }

    #[test]
    fn test_invalid_sales_is_missing_not_zero() {
        let mapper = FieldMapper::new();
        let mut pairs = full_row();
        pairs[3] = ("Actual Sales Units", "twelve");
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&pairs));

        assert_eq!(record.unwrap().sales_units, None);
        assert_eq!(violations[0].field, "Actual Sales Units");
        assert_eq!(violations[0].level, DqLevel::Warning);
    }

    #[test]
    fn test_blank_eow_stock_is_missing() {
        let mapper = FieldMapper::new();
        let mut pairs = full_row();
        pairs[4] = ("Actual EOW Stock Units", "");
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&pairs));
        let record = record.unwrap();

        assert_eq!(record.eow_stock_units, None);
        assert_eq!(record.stock_plus_sales(), None);
        assert_eq!(violations[0].level, DqLevel::Info);
    }

    #[test]
    fn test_blank_intake_counts_as_zero() {
        let mapper = FieldMapper::new();
        let mut pairs = full_row();
        pairs[6] = ("Actual Intake Units", " ");
        let (record, violations) = mapper.map_to_sales_record(&raw_row(&pairs));

        assert_eq!(record.unwrap().actual_intake_units, 0.0);
        assert_eq!(violations[0].field, "Actual Intake Units");
        assert_eq!(violations[0].level, DqLevel::Info);
    }
}
