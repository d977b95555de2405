// ==========================================
// 零售进货预测 - 进货推算引擎
// ==========================================
// 职责:
//   1. 预期进货: 预期区间内 Expected Intake Units 合计
//   2. 实际进货: 历史区间内 Actual Intake Units 合计
//   3. 当前库存: 最近完结周 Actual Current Stock Units 合计
//   4. 各推算周期:
//      projected_sales = round(usable_avg × 周数 × 递减系数)
//      ideal_intake    = round(projected_sales / 售罄比例) − 当前库存
// 红线: ideal_intake 允许为负，不得截断为 0
// ==========================================

use crate::config::{ForecastConstants, ForecastParameters, HorizonSpec};
use crate::domain::forecast::{DemandEstimate, HorizonProjection, StockPosition};
use crate::domain::sales::SalesRecord;
use crate::domain::types::Period;
use crate::engine::forecast_core::ForecastCore;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

pub struct IntakeProjector {
    constants: Arc<ForecastConstants>,
}

impl IntakeProjector {
    pub fn new(constants: Arc<ForecastConstants>) -> Self {
        Self { constants }
    }

    /// 按 SKU 汇总进货与当前库存
    ///
    /// # 参数
    /// - latest_completed: 最近完结周；None 时当前库存全部为 0
    pub fn stock_positions(
        records: &[SalesRecord],
        params: &ForecastParameters,
        latest_completed: Option<Period>,
    ) -> HashMap<String, StockPosition> {
        let historical = params.historical_horizon();
        let expected = params.expected_horizon();
        let mut positions: HashMap<String, StockPosition> = HashMap::new();

        for record in records {
            let position = positions.entry(record.sku_id.clone()).or_default();

            if expected.contains_opt(record.period) {
                position.expected_intake_total += record.expected_intake_units;
            }
            if historical.contains_opt(record.period) {
                position.actual_intake_total += record.actual_intake_units;
            }
            if latest_completed.is_some() && record.period == latest_completed {
                position.current_stock += record.current_stock_units;
            }
        }

        positions
    }

    /// 三个推算周期的销量与理想进货
    pub fn project(&self, estimate: &DemandEstimate, stock: &StockPosition) -> Vec<HorizonProjection> {
        self.constants
            .horizons
            .iter()
            .map(|spec| self.project_horizon(spec, estimate, stock))
            .collect()
    }

    fn project_horizon(
        &self,
        spec: &HorizonSpec,
        estimate: &DemandEstimate,
        stock: &StockPosition,
    ) -> HorizonProjection {
        let projected_sales = estimate.usable_avg.map(|usable| {
            ForecastCore::round(usable * spec.length_weeks * spec.diminishing_return)
        });

        let ideal_intake = projected_sales.and_then(|sales| {
            match ForecastCore::safe_divide(sales, spec.required_clearance) {
                Some(gross) => Some(ForecastCore::round(gross) - stock.current_stock),
                None => {
                    warn!(
                        sku_id = %estimate.sku_id,
                        horizon = %spec.kind,
                        "售罄比例为 0，理想进货无法计算"
                    );
                    None
                }
            }
        });

        HorizonProjection {
            kind: spec.kind,
            projected_sales,
            ideal_intake,
        }
    }
}
