// ==========================================
// 零售进货预测 - 预测 API
// ==========================================
// 职责: 文件 → 报告（导入 + 编排），记录 → 报告
// ==========================================

use crate::api::error::ApiResult;
use crate::config::{ForecastConstants, ForecastParameters};
use crate::domain::forecast::ForecastReport;
use crate::domain::sales::SalesRecord;
use crate::engine::ForecastOrchestrator;
use crate::exporter;
use crate::importer::SalesImporter;
use std::path::Path;
use tracing::{info, instrument};

pub struct ForecastApi {
    importer: SalesImporter,
    orchestrator: ForecastOrchestrator,
}

impl Default for ForecastApi {
    fn default() -> Self {
        Self::new(ForecastConstants::default())
    }
}

impl ForecastApi {
    pub fn new(constants: ForecastConstants) -> Self {
        Self {
            importer: SalesImporter::default(),
            orchestrator: ForecastOrchestrator::new(constants),
        }
    }

    /// 从销售文件生成预测报告
    ///
    /// # 参数
    /// - path: .csv / .xlsx / .xls
    /// - params: 预测参数（先于导入校验）
    ///
    /// # 返回
    /// - Err(ApiError::Import(MissingColumns)): 缺少必需列，不产生任何结果
    #[instrument(skip(self, path, params), fields(path = %path.as_ref().display()))]
    pub fn forecast_file<P: AsRef<Path>>(
        &self,
        path: P,
        params: &ForecastParameters,
    ) -> ApiResult<ForecastReport> {
        params.validate()?;

        let imported = self.importer.import_file(path)?;
        info!(
            total_rows = imported.total_rows,
            accepted = imported.records.len(),
            elapsed_ms = imported.elapsed_time.as_millis() as u64,
            "销售数据导入完成"
        );

        Ok(self.orchestrator.run_imported(&imported, params)?)
    }

    /// 对已构造的记录生成预测报告
    pub fn forecast_records(
        &self,
        records: &[SalesRecord],
        params: &ForecastParameters,
    ) -> ApiResult<ForecastReport> {
        Ok(self.orchestrator.run(records, params)?)
    }

    /// 报告写出为 CSV（SKU 表或商品汇总表）
    pub fn export_report<P: AsRef<Path>>(
        &self,
        report: &ForecastReport,
        path: P,
        by_product: bool,
    ) -> ApiResult<()> {
        if by_product {
            exporter::write_rollup_csv(path, &report.product_rollup)?;
        } else {
            exporter::write_forecast_csv(path, &report.rows)?;
        }
        Ok(())
    }
}
