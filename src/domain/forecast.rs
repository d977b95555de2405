// ==========================================
// 零售进货预测 - SKU 汇总与结果表实体
// ==========================================
// SkuAggregate: 单次运行内构造，构造后只读
// ForecastRow / ProductRollupRow: 输出数据契约（列名与列序固定）
// ==========================================

use crate::domain::quality::{DqSummary, DqViolation};
use crate::domain::types::{EstimateStatus, HorizonKind, Period};
use serde::{Deserialize, Serialize};

// ==========================================
// DemandEstimate - 需求估算结果（每 SKU 一条）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandEstimate {
    pub sku_id: String,

    // 历史区间内全部记录的平均销量（OPP 判定基准）
    pub horizon_avg_sales: Option<f64>,

    // 合格周（HRN=OPP=GP=1）统计
    pub avg_eligible_sales: Option<f64>,
    pub total_eligible_sales: f64,
    pub n_eligible: usize,

    // 区间内 库存+销量 ≥ 2 的周统计（不看毛利）
    pub avg_horizon_sales: Option<f64>,
    pub total_horizon_sales: f64,
    pub n_horizon: usize,

    // 置信折算后的周均销量
    pub usable_avg: Option<f64>,
    pub status: EstimateStatus,
}

// ==========================================
// StockPosition - 库存与进货汇总
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StockPosition {
    pub actual_intake_total: f64,   // 历史区间内实际进货
    pub expected_intake_total: f64, // 预期区间内预期进货
    pub current_stock: f64,         // 最近完结周的当前库存
}

// ==========================================
// HorizonProjection - 单一推算周期的销量/理想进货
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonProjection {
    pub kind: HorizonKind,
    pub projected_sales: Option<f64>,
    pub ideal_intake: Option<f64>, // 允许为负（表示库存过剩）
}

// ==========================================
// SkuAggregate - SKU 级汇总
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuAggregate {
    pub demand: DemandEstimate,
    pub stock: StockPosition,
    pub projections: Vec<HorizonProjection>,
}

impl SkuAggregate {
    pub fn sku_id(&self) -> &str {
        &self.demand.sku_id
    }

    pub fn projection(&self, kind: HorizonKind) -> Option<&HorizonProjection> {
        self.projections.iter().find(|p| p.kind == kind)
    }
}

// ==========================================
// ForecastRow - SKU 结果行（输出列序固定）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRow {
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Category Level 1")]
    pub category_level_1: String,
    #[serde(rename = "Category Level 2")]
    pub category_level_2: String,
    #[serde(rename = "SKU ID")]
    pub sku_id: String,
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Current RSP (incl VAT)")]
    pub price: f64,
    #[serde(rename = "Actual Intake Units")]
    pub actual_intake_units: f64,
    #[serde(rename = "Actual Current Stock Units")]
    pub current_stock_units: f64,
    #[serde(rename = "Expected Intake Units")]
    pub expected_intake_units: f64,
    #[serde(rename = "Tot Ave Sales U in horizon")]
    pub avg_horizon_sales: f64,
    #[serde(rename = "count of horizon data points")]
    pub n_horizon: usize,
    #[serde(rename = "Tot Sales U when in stock")]
    pub total_eligible_sales: f64,
    #[serde(rename = "Av Sales U when in stock")]
    pub avg_eligible_sales: f64,
    #[serde(rename = "count of reviewed data points")]
    pub n_eligible: usize,
    #[serde(rename = "Use_this_ave_sales_u")]
    pub usable_avg: f64,
    #[serde(rename = "Total_Season_Sales")]
    pub season_sales: f64,
    #[serde(rename = "Total_Season_ideal_intakes")]
    pub season_ideal_intake: f64,
    #[serde(rename = "Total_Qtr_Sales")]
    pub quarter_sales: f64,
    #[serde(rename = "Total_Qtr_ideal_intakes")]
    pub quarter_ideal_intake: f64,
    #[serde(rename = "Total_9wks_Sales_once_off_repeat")]
    pub nine_week_sales: f64,
    #[serde(rename = "Total_9wks_Sales_once_off_repeat_ideal_intakes")]
    pub nine_week_ideal_intake: f64,
    #[serde(rename = "Image 1 URL")]
    pub image_url: String,
    #[serde(rename = "product_url")]
    pub product_url: String,

    // 不进入结果表，供调用方区分“需求为 0”与“数据不足”
    #[serde(skip)]
    pub estimate_status: Option<EstimateStatus>,
}

// ==========================================
// ProductRollupRow - 按 Product ID 汇总行
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRollupRow {
    #[serde(rename = "Image 1 URL")]
    pub image_url: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Category Level 1")]
    pub category_level_1: String,
    #[serde(rename = "Category Level 2")]
    pub category_level_2: String,
    #[serde(rename = "Product ID")]
    pub product_id: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Current RSP (incl VAT)")]
    pub price: f64, // SKU 价格均值
    #[serde(rename = "Actual Intake Units")]
    pub actual_intake_units: f64,
    #[serde(rename = "Actual Current Stock Units")]
    pub current_stock_units: f64,
    #[serde(rename = "Expected Intake Units")]
    pub expected_intake_units: f64,
    #[serde(rename = "Tot Ave Sales U in horizon")]
    pub avg_horizon_sales: f64,
    #[serde(rename = "count of horizon data points")]
    pub n_horizon: usize, // SKU 最大值
    #[serde(rename = "Tot Sales U when in stock")]
    pub total_eligible_sales: f64,
    #[serde(rename = "Av Sales U when in stock")]
    pub avg_eligible_sales: f64,
    #[serde(rename = "count of reviewed data points")]
    pub n_eligible: usize, // SKU 最大值
    #[serde(rename = "Use_this_ave_sales_u")]
    pub usable_avg: f64,
    #[serde(rename = "Total_Season_Sales")]
    pub season_sales: f64,
    #[serde(rename = "Total_Season_ideal_intakes")]
    pub season_ideal_intake: f64,
    #[serde(rename = "Total_Qtr_Sales")]
    pub quarter_sales: f64,
    #[serde(rename = "Total_Qtr_ideal_intakes")]
    pub quarter_ideal_intake: f64,
    #[serde(rename = "Total_9wks_Sales_once_off_repeat")]
    pub nine_week_sales: f64,
    #[serde(rename = "Total_9wks_Sales_once_off_repeat_ideal_intakes")]
    pub nine_week_ideal_intake: f64,
    #[serde(rename = "product_url")]
    pub product_url: String,
}

// ==========================================
// ForecastReport - 单次运行结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    pub financial_year: i32,
    pub latest_completed_period: Option<Period>,
    pub aggregates: Vec<SkuAggregate>,
    pub rows: Vec<ForecastRow>,
    pub product_rollup: Vec<ProductRollupRow>,
    pub dq_summary: DqSummary,
    pub violations: Vec<DqViolation>,
}

impl ForecastReport {
    pub fn row(&self, sku_id: &str) -> Option<&ForecastRow> {
        self.rows.iter().find(|r| r.sku_id == sku_id)
    }

    pub fn aggregate(&self, sku_id: &str) -> Option<&SkuAggregate> {
        self.aggregates.iter().find(|a| a.sku_id() == sku_id)
    }
}
