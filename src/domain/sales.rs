// ==========================================
// 零售进货预测 - 销售记录实体
// ==========================================
// 一行 = 一个 SKU 在一个财务周的交易快照
// 同一 (SKU, 周期) 允许重复出现，统计时全部计入，不去重
// ==========================================

use crate::domain::types::Period;
use serde::{Deserialize, Serialize};

// ==========================================
// ProductAttributes - 商品描述属性（透传）
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributes {
    pub product_id: String,
    pub brand: String,
    pub department: String,
    pub category_level_1: String,
    pub category_level_2: String,
    pub product: String,
    pub size: String,
    pub price: Option<f64>, // Current RSP (incl VAT)
    pub image_url: String,
    pub product_url: String,
}

// ==========================================
// SalesRecord - 周销售记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub row_number: usize, // 原始文件行号（DQ 报告用）
    pub sku_id: String,
    pub period: Option<Period>, // 缺失时不参与任何周期相关计算

    // 销量/周末库存（单位: 件）；缺失的周不进入任何销量统计
    pub sales_units: Option<f64>,
    pub eow_stock_units: Option<f64>,

    // 进货/当前库存（单位: 件）；缺失按 0 计
    pub actual_intake_units: f64,
    pub expected_intake_units: f64,
    pub current_stock_units: f64,

    // 毛利率（小数，可缺失）
    pub margin: Option<f64>,

    pub attributes: ProductAttributes,
}

impl SalesRecord {
    /// 以最少字段构造记录，其余数量为 0、毛利缺失
    pub fn new(sku_id: impl Into<String>, period: impl Into<Period>, sales_units: f64, eow_stock_units: f64) -> Self {
        Self {
            row_number: 0,
            sku_id: sku_id.into(),
            period: Some(period.into()),
            sales_units: Some(sales_units),
            eow_stock_units: Some(eow_stock_units),
            actual_intake_units: 0.0,
            expected_intake_units: 0.0,
            current_stock_units: 0.0,
            margin: None,
            attributes: ProductAttributes::default(),
        }
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn with_current_stock(mut self, units: f64) -> Self {
        self.current_stock_units = units;
        self
    }

    pub fn with_intakes(mut self, actual: f64, expected: f64) -> Self {
        self.actual_intake_units = actual;
        self.expected_intake_units = expected;
        self
    }

    pub fn with_attributes(mut self, attributes: ProductAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// 销量缺失（空白或非数值）
    pub fn without_sales(mut self) -> Self {
        self.sales_units = None;
        self
    }

    /// 周初可售量近似: 周末库存 + 本周销量；任一缺失 → None
    pub fn stock_plus_sales(&self) -> Option<f64> {
        Some(self.eow_stock_units? + self.sales_units?)
    }
}
