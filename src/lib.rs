// ==========================================
// 零售进货预测 - 核心库
// ==========================================
// 技术栈: Rust + calamine/csv + tracing
// 系统定位: 决策支持（计划员最终决定进货量）
// 数据流: 导入 → 周期判定 → 准入过滤 → 需求估算 → 进货推算 → 结果组装
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 用户参数与固定常量
pub mod config;

// 导入层 - 外部数据
pub mod importer;

// 引擎层 - 业务规则
pub mod engine;

// 导出层 - 结果表输出
pub mod exporter;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{EstimateStatus, HorizonKind, Period, PeriodRange};

// 领域实体
pub use domain::{
    DqLevel, DqSummary, DqViolation, ForecastReport, ForecastRow, ProductAttributes,
    ProductRollupRow, SalesRecord, SkuAggregate,
};

// 配置
pub use config::{ForecastConstants, ForecastParameters, HorizonSpec};

// 引擎
pub use engine::{
    DemandEstimator, EligibilityEngine, ForecastOrchestrator, IntakeProjector, PeriodResolver,
    ProductRollup, ResultAssembler,
};

// API
pub use api::{ApiError, ApiResult, ForecastApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "零售进货预测";
