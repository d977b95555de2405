// ==========================================
// 零售进货预测 - 合格周准入引擎
// ==========================================
// 红线: 缺货周、异常折扣周、区间外周不得进入需求信号
// ==========================================
// 职责: 逐记录计算三个标志
//   HRN: 周期落在历史区间内（闭区间）
//   OPP: HRN 且 库存+销量 ≥ SKU 区间均销 × stock_threshold 且 ≥ 2
//        （销量或周末库存缺失 → OPP=0）
//   GP : HRN 且 (毛利 ≥ 最低毛利 × 0.9 或 毛利缺失)
//   eligible = HRN + OPP + GP == 3
// 输入: SalesRecord 列表 + 预测参数
// 输出: 与输入一一对应的标志 + SKU 区间均销
// ==========================================

use crate::config::{ForecastConstants, ForecastParameters};
use crate::domain::sales::SalesRecord;
use crate::domain::types::PeriodRange;
use crate::engine::forecast_core::SumCount;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, instrument};

// ==========================================
// EligibilityFlags - 单记录标志
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityFlags {
    pub hrn: bool,
    pub opp: bool,
    pub gp: bool,
}

impl EligibilityFlags {
    /// 三标志之和（0..=3）
    pub fn score(&self) -> u8 {
        self.hrn as u8 + self.opp as u8 + self.gp as u8
    }

    pub fn is_eligible(&self) -> bool {
        self.score() == 3
    }
}

// ==========================================
// EligibilityOutcome - 批量评估结果
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct EligibilityOutcome {
    /// 与输入记录下标一一对应
    pub flags: Vec<EligibilityFlags>,
    /// SKU → 历史区间内平均销量（无区间记录的 SKU 不出现）
    pub horizon_avg_sales: HashMap<String, f64>,
}

// ==========================================
// EligibilityEngine
// ==========================================
// 红线: 不修改输入记录,只计算和返回标志
pub struct EligibilityEngine {
    constants: Arc<ForecastConstants>,
}

impl EligibilityEngine {
    /// 创建新的 EligibilityEngine 实例
    pub fn new(constants: Arc<ForecastConstants>) -> Self {
        Self { constants }
    }

    /// 批量评估
    #[instrument(skip(self, records, params), fields(records = records.len()))]
    pub fn evaluate(
        &self,
        records: &[SalesRecord],
        params: &ForecastParameters,
    ) -> EligibilityOutcome {
        let horizon = params.historical_horizon();

        // 第一遍: SKU 区间均销
        let horizon_avg_sales = Self::horizon_average_sales(records, horizon);

        // 第二遍: 逐记录标志
        let margin_floor = params.min_acceptable_margin * self.constants.margin_tolerance;
        let flags: Vec<EligibilityFlags> = records
            .iter()
            .map(|record| {
                self.evaluate_single(
                    record,
                    horizon,
                    horizon_avg_sales.get(&record.sku_id).copied(),
                    margin_floor,
                )
            })
            .collect();

        let eligible = flags.iter().filter(|f| f.is_eligible()).count();
        debug!(
            in_horizon = flags.iter().filter(|f| f.hrn).count(),
            eligible,
            "准入标志计算完成"
        );

        EligibilityOutcome {
            flags,
            horizon_avg_sales,
        }
    }

    /// 评估单条记录
    ///
    /// # 参数
    /// - horizon_avg: SKU 区间均销；None 时 OPP 恒为 false
    /// - margin_floor: 最低毛利 × 容差
    pub fn evaluate_single(
        &self,
        record: &SalesRecord,
        horizon: PeriodRange,
        horizon_avg: Option<f64>,
        margin_floor: f64,
    ) -> EligibilityFlags {
        let hrn = Self::is_in_horizon(record, horizon);
        let opp = hrn
            && record.stock_plus_sales().is_some_and(|stock_plus_sales| {
                Self::has_sufficient_stock(
                    stock_plus_sales,
                    horizon_avg,
                    self.constants.stock_threshold,
                    self.constants.min_stock_plus_sales,
                )
            });
        let gp = hrn && Self::has_acceptable_margin(record.margin, margin_floor);

        EligibilityFlags { hrn, opp, gp }
    }

    /// HRN: start ≤ period ≤ end；周期缺失 → false
    pub fn is_in_horizon(record: &SalesRecord, horizon: PeriodRange) -> bool {
        horizon.contains_opt(record.period)
    }

    /// OPP 库存条件（不含 HRN）
    pub fn has_sufficient_stock(
        stock_plus_sales: f64,
        horizon_avg: Option<f64>,
        stock_threshold: f64,
        min_stock_plus_sales: f64,
    ) -> bool {
        match horizon_avg {
            Some(avg) => {
                stock_plus_sales >= avg * stock_threshold && stock_plus_sales >= min_stock_plus_sales
            }
            None => false,
        }
    }

    /// GP 毛利条件（不含 HRN）: 缺失毛利视为可接受
    pub fn has_acceptable_margin(margin: Option<f64>, margin_floor: f64) -> bool {
        match margin {
            Some(m) => m >= margin_floor,
            None => true,
        }
    }

    /// SKU 历史区间均销（区间内有销量的记录，不看库存/毛利）
    pub fn horizon_average_sales(
        records: &[SalesRecord],
        horizon: PeriodRange,
    ) -> HashMap<String, f64> {
        let mut acc: HashMap<&str, SumCount> = HashMap::new();
        for record in records.iter().filter(|r| Self::is_in_horizon(r, horizon)) {
            if let Some(sales) = record.sales_units {
                acc.entry(record.sku_id.as_str()).or_default().add(sales);
            }
        }

        acc.into_iter()
            .filter_map(|(sku, sc)| sc.mean().map(|avg| (sku.to_string(), avg)))
            .collect()
    }
}
