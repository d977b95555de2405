// ==========================================
// 零售进货预测 - 按商品汇总
// ==========================================
// 规则（按 Product ID 分组，首次出现顺序）:
// - 描述属性: 组内首个 SKU
// - 价格: SKU 价格均值
// - 区间点数 / 合格点数: 组内最大值
// - 其余数值列: 求和
// - 无 Product ID 的 SKU 不参与汇总
// ==========================================

use crate::domain::forecast::{ForecastRow, ProductRollupRow};
use crate::engine::forecast_core::SumCount;
use std::collections::HashMap;
use tracing::debug;

pub struct ProductRollup;

impl ProductRollup {
    pub fn build(rows: &[ForecastRow]) -> Vec<ProductRollupRow> {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<&ForecastRow>> = HashMap::new();

        for row in rows.iter().filter(|r| !r.product_id.is_empty()) {
            let group = groups.entry(row.product_id.as_str()).or_insert_with(|| {
                order.push(row.product_id.as_str());
                Vec::new()
            });
            group.push(row);
        }

        let rollup: Vec<ProductRollupRow> = order
            .into_iter()
            .filter_map(|product_id| groups.get(product_id))
            .filter_map(|group| Self::rollup_group(group))
            .collect();

        debug!(skus = rows.len(), products = rollup.len(), "商品汇总完成");
        rollup
    }

    fn rollup_group(group: &[&ForecastRow]) -> Option<ProductRollupRow> {
        let first = group.first()?;
        let sum = |f: fn(&ForecastRow) -> f64| group.iter().map(|r| f(r)).sum::<f64>();

        let mut price = SumCount::default();
        for row in group {
            price.add(row.price);
        }

        Some(ProductRollupRow {
            image_url: first.image_url.clone(),
            brand: first.brand.clone(),
            department: first.department.clone(),
            category_level_1: first.category_level_1.clone(),
            category_level_2: first.category_level_2.clone(),
            product_id: first.product_id.clone(),
            product: first.product.clone(),
            price: price.mean().unwrap_or(0.0),
            actual_intake_units: sum(|r| r.actual_intake_units),
            current_stock_units: sum(|r| r.current_stock_units),
            expected_intake_units: sum(|r| r.expected_intake_units),
            avg_horizon_sales: sum(|r| r.avg_horizon_sales),
            n_horizon: group.iter().map(|r| r.n_horizon).max().unwrap_or(0),
            total_eligible_sales: sum(|r| r.total_eligible_sales),
            avg_eligible_sales: sum(|r| r.avg_eligible_sales),
            n_eligible: group.iter().map(|r| r.n_eligible).max().unwrap_or(0),
            usable_avg: sum(|r| r.usable_avg),
            season_sales: sum(|r| r.season_sales),
            season_ideal_intake: sum(|r| r.season_ideal_intake),
            quarter_sales: sum(|r| r.quarter_sales),
            quarter_ideal_intake: sum(|r| r.quarter_ideal_intake),
            nine_week_sales: sum(|r| r.nine_week_sales),
            nine_week_ideal_intake: sum(|r| r.nine_week_ideal_intake),
            product_url: first.product_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sku: &str, product: &str, price: f64, season_sales: f64, n_eligible: usize) -> ForecastRow {
        ForecastRow {
            brand: "Acme".to_string(),
            department: String::new(),
            category_level_1: String::new(),
            category_level_2: String::new(),
            sku_id: sku.to_string(),
            product_id: product.to_string(),
            product: format!("{} name", product),
            size: String::new(),
            price,
            actual_intake_units: 1.0,
            current_stock_units: 10.0,
            expected_intake_units: 0.0,
            avg_horizon_sales: 0.0,
            n_horizon: 10,
            total_eligible_sales: 0.0,
            avg_eligible_sales: 0.0,
            n_eligible,
            usable_avg: 0.0,
            season_sales,
            season_ideal_intake: 0.0,
            quarter_sales: 0.0,
            quarter_ideal_intake: 0.0,
            nine_week_sales: 0.0,
            nine_week_ideal_intake: 0.0,
            image_url: String::new(),
            product_url: String::new(),
            estimate_status: None,
        }
    }

    #[test]
    fn test_rollup_sums_means_and_maxes() {
        let rows = vec![
            row("S1", "P1", 100.0, 420.0, 6),
            row("S2", "P2", 50.0, 10.0, 1),
            row("S3", "P1", 200.0, 80.0, 8),
            row("S4", "", 1.0, 1.0, 1),
        ];

        let rollup = ProductRollup::build(&rows);

        assert_eq!(rollup.len(), 2);
        assert_eq!(rollup[0].product_id, "P1");
        assert_eq!(rollup[0].price, 150.0);
        assert_eq!(rollup[0].season_sales, 500.0);
        assert_eq!(rollup[0].current_stock_units, 20.0);
        assert_eq!(rollup[0].n_eligible, 8);
        assert_eq!(rollup[0].n_horizon, 10);
        assert_eq!(rollup[1].product_id, "P2");
    }
}
