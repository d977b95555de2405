// ==========================================
// 零售进货预测 - 引擎编排器
// ==========================================
// 用途: 协调各引擎的执行顺序（单次、同步、无共享可变状态）
// 流程:
//   1. PeriodResolver    - 最近完结周
//   2. EligibilityEngine - 合格周准入
//   3. DemandEstimator   - 需求估算
//   4. IntakeProjector   - 库存汇总 + 进货推算
//   5. ResultAssembler   - 结果行
//   6. ProductRollup     - 按商品汇总
// ==========================================

use crate::config::{ConfigResult, ForecastConstants, ForecastParameters};
use crate::domain::forecast::{ForecastReport, SkuAggregate};
use crate::domain::quality::{DqLevel, DqSummary, DqViolation};
use crate::domain::sales::SalesRecord;
use crate::domain::types::EstimateStatus;
use crate::engine::{
    DemandEstimator, EligibilityEngine, IntakeProjector, PeriodResolver, ProductRollup,
    ResultAssembler,
};
use crate::importer::ImportedSales;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// ==========================================
// ForecastOrchestrator - 引擎编排器
// ==========================================
pub struct ForecastOrchestrator {
    eligibility: EligibilityEngine,
    estimator: DemandEstimator,
    projector: IntakeProjector,
}

impl Default for ForecastOrchestrator {
    fn default() -> Self {
        Self::new(ForecastConstants::default())
    }
}

impl ForecastOrchestrator {
    /// 创建新的编排器实例
    ///
    /// # 参数
    /// - constants: 固定业务常量（注入各引擎）
    pub fn new(constants: ForecastConstants) -> Self {
        let constants = Arc::new(constants);
        Self {
            eligibility: EligibilityEngine::new(constants.clone()),
            estimator: DemandEstimator::new(constants.clone()),
            projector: IntakeProjector::new(constants),
        }
    }

    /// 执行完整预测流程
    ///
    /// # 返回
    /// - Ok(ForecastReport): 每个 SKU 恰好一行 + 商品汇总 + DQ
    /// - Err: 参数非法（在任何计算之前）
    #[instrument(skip_all, fields(records = records.len(), financial_year = params.financial_year))]
    pub fn run(
        &self,
        records: &[SalesRecord],
        params: &ForecastParameters,
    ) -> ConfigResult<ForecastReport> {
        self.run_with_violations(records, params, records.len(), Vec::new())
    }

    /// 对导入结果执行预测，导入阶段 DQ 并入报告
    pub fn run_imported(
        &self,
        imported: &ImportedSales,
        params: &ForecastParameters,
    ) -> ConfigResult<ForecastReport> {
        self.run_with_violations(
            &imported.records,
            params,
            imported.total_rows,
            imported.violations.clone(),
        )
    }

    fn run_with_violations(
        &self,
        records: &[SalesRecord],
        params: &ForecastParameters,
        total_rows: usize,
        mut violations: Vec<DqViolation>,
    ) -> ConfigResult<ForecastReport> {
        params.validate()?;

        info!(
            records = records.len(),
            historical = %params.historical_horizon(),
            expected = %params.expected_horizon(),
            "开始执行预测流程"
        );

        let sku_order = ResultAssembler::sku_order(records);

        // ==========================================
        // 步骤1: 最近完结周
        // ==========================================
        let latest_completed = PeriodResolver::latest_completed_period(records);
        match latest_completed {
            Some(period) => debug!(period = %period, "步骤1: 最近完结周已确定"),
            None => {
                warn!("步骤1: 无有效周期，当前库存按 0 处理");
                violations.push(DqViolation {
                    row_number: None,
                    sku_id: None,
                    level: DqLevel::Warning,
                    field: "Actual Current Stock Units".to_string(),
                    message: "无法确定最近完结周，当前库存按 0 处理".to_string(),
                });
            }
        }

        // ==========================================
        // 步骤2: 合格周准入
        // ==========================================
        let outcome = self.eligibility.evaluate(records, params);

        // ==========================================
        // 步骤3: 需求估算
        // ==========================================
        let estimates = self.estimator.estimate(records, &outcome, &sku_order);

        // ==========================================
        // 步骤4: 库存汇总 + 进货推算
        // ==========================================
        let mut positions = IntakeProjector::stock_positions(records, params, latest_completed);
        let aggregates: Vec<SkuAggregate> = estimates
            .into_iter()
            .map(|demand| {
                let stock = positions.remove(&demand.sku_id).unwrap_or_default();
                let projections = self.projector.project(&demand, &stock);
                SkuAggregate {
                    demand,
                    stock,
                    projections,
                }
            })
            .collect();

        for aggregate in &aggregates {
            if aggregate.demand.status == EstimateStatus::InsufficientData {
                warn!(sku_id = %aggregate.sku_id(), "无合格周，需求与推算按 0 输出");
                violations.push(DqViolation::sku(
                    aggregate.sku_id(),
                    DqLevel::Warning,
                    "Use_this_ave_sales_u",
                    format!("SKU {} 无合格周，无法估算需求", aggregate.sku_id()),
                ));
            }
        }

        // ==========================================
        // 步骤5-6: 结果行 + 商品汇总
        // ==========================================
        let rows = ResultAssembler::assemble(records, &aggregates);
        let product_rollup = ProductRollup::build(&rows);
        let dq_summary = DqSummary::from_violations(total_rows, records.len(), &violations);

        info!(
            skus = rows.len(),
            products = product_rollup.len(),
            warnings = dq_summary.warnings,
            "预测流程完成"
        );

        Ok(ForecastReport {
            financial_year: params.financial_year,
            latest_completed_period: latest_completed,
            aggregates,
            rows,
            product_rollup,
            dq_summary,
            violations,
        })
    }
}
