// ==========================================
// 零售进货预测 - 最近完结周判定
// ==========================================
// 规则: 按周期汇总 Actual Current Stock Units，取合计最大的周期
// 并列: 取最早的周期（按周期升序遍历，仅严格更大才替换）
// 用途: 仅用于切片“当前库存”，不影响历史区间
// ==========================================

use crate::domain::sales::SalesRecord;
use crate::domain::types::Period;
use std::collections::BTreeMap;
use tracing::debug;

pub struct PeriodResolver;

impl PeriodResolver {
    /// 判定最近完结周
    ///
    /// # 返回
    /// - Some(Period): 库存合计最大的周期
    /// - None: 无任何带周期的记录
    pub fn latest_completed_period(records: &[SalesRecord]) -> Option<Period> {
        let mut stock_by_period: BTreeMap<Period, f64> = BTreeMap::new();
        for record in records {
            if let Some(period) = record.period {
                *stock_by_period.entry(period).or_insert(0.0) += record.current_stock_units;
            }
        }

        let mut best: Option<(Period, f64)> = None;
        for (period, total) in stock_by_period {
            match best {
                Some((_, best_total)) if total <= best_total => {}
                _ => best = Some((period, total)),
            }
        }

        if let Some((period, total)) = best {
            debug!(period = %period, total_stock = total, "最近完结周");
        }
        best.map(|(period, _)| period)
    }
}
