// ==========================================
// 零售进货预测 - 结果组装
// ==========================================
// 职责: SKU 汇总 ⟕ 描述属性 → ForecastRow
// 规则:
// - 上传中出现过的每个 SKU 恰好输出一行（含无合格周的 SKU）
// - 描述属性取该 SKU 在上传中首次出现的行
// - 缺失数值一律填 0
// ==========================================

use crate::domain::forecast::{ForecastRow, SkuAggregate};
use crate::domain::sales::{ProductAttributes, SalesRecord};
use crate::domain::types::HorizonKind;
use std::collections::{HashMap, HashSet};

pub struct ResultAssembler;

impl ResultAssembler {
    /// SKU 首次出现顺序（去重）
    pub fn sku_order(records: &[SalesRecord]) -> Vec<String> {
        let mut seen = HashSet::new();
        records
            .iter()
            .filter(|r| seen.insert(r.sku_id.as_str()))
            .map(|r| r.sku_id.clone())
            .collect()
    }

    /// SKU → 首次出现行的描述属性
    pub fn first_seen_attributes(records: &[SalesRecord]) -> HashMap<&str, &ProductAttributes> {
        let mut attributes = HashMap::new();
        for record in records {
            attributes
                .entry(record.sku_id.as_str())
                .or_insert(&record.attributes);
        }
        attributes
    }

    /// 组装结果行，顺序与 aggregates 一致
    pub fn assemble(records: &[SalesRecord], aggregates: &[SkuAggregate]) -> Vec<ForecastRow> {
        let attributes = Self::first_seen_attributes(records);
        let empty = ProductAttributes::default();

        aggregates
            .iter()
            .map(|aggregate| {
                let attrs = attributes.get(aggregate.sku_id()).copied().unwrap_or(&empty);
                Self::build_row(attrs, aggregate)
            })
            .collect()
    }

    fn build_row(attrs: &ProductAttributes, aggregate: &SkuAggregate) -> ForecastRow {
        let demand = &aggregate.demand;
        let projected = |kind: HorizonKind| {
            aggregate
                .projection(kind)
                .map(|p| {
                    (
                        p.projected_sales.unwrap_or(0.0),
                        p.ideal_intake.unwrap_or(0.0),
                    )
                })
                .unwrap_or((0.0, 0.0))
        };
        let (season_sales, season_ideal_intake) = projected(HorizonKind::Season);
        let (quarter_sales, quarter_ideal_intake) = projected(HorizonKind::Quarter);
        let (nine_week_sales, nine_week_ideal_intake) = projected(HorizonKind::NineWeek);

        ForecastRow {
            brand: attrs.brand.clone(),
            department: attrs.department.clone(),
            category_level_1: attrs.category_level_1.clone(),
            category_level_2: attrs.category_level_2.clone(),
            sku_id: demand.sku_id.clone(),
            product_id: attrs.product_id.clone(),
            product: attrs.product.clone(),
            size: attrs.size.clone(),
            price: attrs.price.unwrap_or(0.0),
            actual_intake_units: aggregate.stock.actual_intake_total,
            current_stock_units: aggregate.stock.current_stock,
            expected_intake_units: aggregate.stock.expected_intake_total,
            avg_horizon_sales: demand.avg_horizon_sales.unwrap_or(0.0),
            n_horizon: demand.n_horizon,
            total_eligible_sales: demand.total_eligible_sales,
            avg_eligible_sales: demand.avg_eligible_sales.unwrap_or(0.0),
            n_eligible: demand.n_eligible,
            usable_avg: demand.usable_avg.unwrap_or(0.0),
            season_sales,
            season_ideal_intake,
            quarter_sales,
            quarter_ideal_intake,
            nine_week_sales,
            nine_week_ideal_intake,
            image_url: attrs.image_url.clone(),
            product_url: attrs.product_url.clone(),
            estimate_status: Some(demand.status),
        }
    }
}
