// ==========================================
// 零售进货预测 - 需求估算引擎
// ==========================================
// 职责: 按 SKU 汇总合格周与区间周，得到置信折算后的周均销量
// 规则:
//   合格周: eligible 记录的 均值/合计/计数
//   区间周: HRN 且 库存+销量 ≥ 2 的 均值/合计/计数（不看毛利）
//   销量或周末库存缺失的周两者都不计
//   n_eligible ≤ 4 或 n_eligible / n_horizon ≤ 0.5 → × low_data_confidence
//   否则 → × confidence
//   n_horizon = 0 → 比值无定义，按低置信处理
//   n_eligible = 0 → 无法估算（InsufficientData）
// ==========================================

use crate::config::ForecastConstants;
use crate::domain::forecast::DemandEstimate;
use crate::domain::sales::SalesRecord;
use crate::domain::types::EstimateStatus;
use crate::engine::eligibility::EligibilityOutcome;
use crate::engine::forecast_core::{ForecastCore, SumCount};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

pub struct DemandEstimator {
    constants: Arc<ForecastConstants>,
}

#[derive(Default)]
struct SkuAccumulator {
    eligible: SumCount,
    horizon: SumCount,
}

impl DemandEstimator {
    pub fn new(constants: Arc<ForecastConstants>) -> Self {
        Self { constants }
    }

    /// 按 SKU 估算需求
    ///
    /// # 参数
    /// - records: 全部销售记录
    /// - outcome: 与 records 对齐的准入标志
    /// - sku_order: 输出顺序（每个 SKU 恰好一条）
    #[instrument(skip_all, fields(skus = sku_order.len()))]
    pub fn estimate(
        &self,
        records: &[SalesRecord],
        outcome: &EligibilityOutcome,
        sku_order: &[String],
    ) -> Vec<DemandEstimate> {
        let mut acc: HashMap<&str, SkuAccumulator> = HashMap::new();

        for (record, flags) in records.iter().zip(outcome.flags.iter()) {
            let entry = acc.entry(record.sku_id.as_str()).or_default();
            let (Some(sales), Some(stock_plus_sales)) =
                (record.sales_units, record.stock_plus_sales())
            else {
                continue;
            };

            if flags.is_eligible() {
                entry.eligible.add(sales);
            }
            if flags.hrn && stock_plus_sales >= self.constants.min_stock_plus_sales {
                entry.horizon.add(sales);
            }
        }

        sku_order
            .iter()
            .map(|sku_id| {
                let sku_acc = acc.remove(sku_id.as_str()).unwrap_or_default();
                self.build_estimate(
                    sku_id,
                    &sku_acc,
                    outcome.horizon_avg_sales.get(sku_id).copied(),
                )
            })
            .collect()
    }

    fn build_estimate(
        &self,
        sku_id: &str,
        acc: &SkuAccumulator,
        horizon_avg_sales: Option<f64>,
    ) -> DemandEstimate {
        let avg_eligible_sales = acc.eligible.mean();
        let (usable_avg, status) =
            self.usable_average(avg_eligible_sales, acc.eligible.count, acc.horizon.count);

        debug!(
            sku_id,
            n_eligible = acc.eligible.count,
            n_horizon = acc.horizon.count,
            usable_avg = ?usable_avg,
            status = %status,
            "需求估算"
        );

        DemandEstimate {
            sku_id: sku_id.to_string(),
            horizon_avg_sales,
            avg_eligible_sales,
            total_eligible_sales: acc.eligible.sum,
            n_eligible: acc.eligible.count,
            avg_horizon_sales: acc.horizon.mean(),
            total_horizon_sales: acc.horizon.sum,
            n_horizon: acc.horizon.count,
            usable_avg,
            status,
        }
    }

    /// 置信分支判定
    pub fn is_low_confidence(&self, n_eligible: usize, n_horizon: usize) -> bool {
        if n_eligible <= self.constants.min_data_points {
            return true;
        }
        match ForecastCore::safe_divide(n_eligible as f64, n_horizon as f64) {
            Some(ratio) => ratio <= self.constants.data_reduction_threshold,
            None => true,
        }
    }

    /// 置信折算后的周均销量
    pub fn usable_average(
        &self,
        avg_eligible_sales: Option<f64>,
        n_eligible: usize,
        n_horizon: usize,
    ) -> (Option<f64>, EstimateStatus) {
        let avg = match avg_eligible_sales {
            Some(avg) => avg,
            None => return (None, EstimateStatus::InsufficientData),
        };

        if self.is_low_confidence(n_eligible, n_horizon) {
            (
                Some(avg * self.constants.low_data_confidence),
                EstimateStatus::LowConfidence,
            )
        } else {
            (Some(avg * self.constants.confidence), EstimateStatus::Confident)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ForecastParameters;
    use crate::engine::eligibility::{EligibilityEngine, EligibilityFlags};

    fn params() -> ForecastParameters {
        ForecastParameters {
            historical_horizon_start: 202501,
            historical_horizon_end: 202510,
            expected_horizon_start: 202511,
            expected_horizon_end: 202520,
            min_acceptable_margin: 0.35,
            financial_year: 2025,
        }
    }

    fn estimator() -> DemandEstimator {
        DemandEstimator::new(Arc::new(ForecastConstants::default()))
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_confidence_branches() {
        let e = estimator();
        // 6 > 4 且 0.6 > 0.5
        assert!(!e.is_low_confidence(6, 10));
        // 恰好 4 个点
        assert!(e.is_low_confidence(4, 4));
        // 比值恰好 0.5
        assert!(e.is_low_confidence(5, 10));
        // n_horizon = 0 不崩溃，按低置信
        assert!(e.is_low_confidence(5, 0));
    }

    #[test]
    fn test_usable_average() {
        let e = estimator();
        let (usable, status) = e.usable_average(Some(20.0), 6, 10);
        assert!(approx(usable.unwrap(), 17.0));
        assert_eq!(status, EstimateStatus::Confident);

        let (usable, status) = e.usable_average(Some(15.0), 2, 10);
        assert!(approx(usable.unwrap(), 10.5));
        assert_eq!(status, EstimateStatus::LowConfidence);

        let (usable, status) = e.usable_average(None, 0, 10);
        assert_eq!(usable, None);
        assert_eq!(status, EstimateStatus::InsufficientData);
    }

    #[test]
    fn test_estimate_counts_duplicates_and_keeps_order() {
        let records = vec![
            SalesRecord::new("B", 202501, 4.0, 10.0),
            SalesRecord::new("A", 202501, 10.0, 10.0),
            SalesRecord::new("A", 202501, 20.0, 10.0), // 重复周期，不去重
            SalesRecord::new("A", 202502, 0.0, 1.0),   // 库存+销量 < 2
        ];
        let eligible = EligibilityFlags { hrn: true, opp: true, gp: true };
        let outcome = EligibilityOutcome {
            flags: vec![
                EligibilityFlags { hrn: true, opp: false, gp: true },
                eligible,
                eligible,
                EligibilityFlags { hrn: true, opp: false, gp: true },
            ],
            horizon_avg_sales: HashMap::new(),
        };
        let order = vec!["B".to_string(), "A".to_string(), "C".to_string()];

        let estimates = estimator().estimate(&records, &outcome, &order);

        assert_eq!(estimates.len(), 3);
        assert_eq!(estimates[0].sku_id, "B");
        assert_eq!(estimates[0].n_eligible, 0);
        assert_eq!(estimates[0].n_horizon, 1);
        assert_eq!(estimates[0].status, EstimateStatus::InsufficientData);

        assert_eq!(estimates[1].n_eligible, 2);
        assert_eq!(estimates[1].total_eligible_sales, 30.0);
        assert_eq!(estimates[1].avg_eligible_sales, Some(15.0));
        assert_eq!(estimates[1].n_horizon, 2);
        assert_eq!(estimates[1].status, EstimateStatus::LowConfidence);

        // 未出现在记录中的 SKU 也有估算（全部为空）
        assert_eq!(estimates[2].n_horizon, 0);
        assert_eq!(estimates[2].usable_avg, None);
    }

    #[test]
    fn test_missing_sales_week_not_counted() {
        // 5 周销量 10 + 1 周销量缺失: 计数 5/5，均值 10，置信折算 8.5
        let mut records: Vec<SalesRecord> = (1..=5)
            .map(|week| SalesRecord::new("A", 202500 + week, 10.0, 10.0))
            .collect();
        records.push(SalesRecord::new("A", 202506, 0.0, 10.0).without_sales());

        let outcome = EligibilityEngine::new(Arc::new(ForecastConstants::default()))
            .evaluate(&records, &params());
        let estimates = estimator().estimate(&records, &outcome, &["A".to_string()]);

        assert_eq!(estimates[0].n_horizon, 5);
        assert_eq!(estimates[0].n_eligible, 5);
        assert_eq!(estimates[0].avg_eligible_sales, Some(10.0));
        assert!(approx(estimates[0].usable_avg.unwrap(), 8.5));
        assert_eq!(estimates[0].status, EstimateStatus::Confident);
    }
}
