// ==========================================
// 零售进货预测 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含文件读写逻辑,不含引擎逻辑
// ==========================================

pub mod forecast;
pub mod quality;
pub mod sales;
pub mod types;

// 重导出核心类型
pub use forecast::{
    DemandEstimate, ForecastReport, ForecastRow, HorizonProjection, ProductRollupRow,
    SkuAggregate, StockPosition,
};
pub use quality::{DqLevel, DqSummary, DqViolation};
pub use sales::{ProductAttributes, SalesRecord};
pub use types::{EstimateStatus, HorizonKind, Period, PeriodRange};
