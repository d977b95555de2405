// ==========================================
// 零售进货预测 - 引擎层
// ==========================================
// 职责: 实现预测业务规则（纯计算，无 I/O）
// 红线: 引擎不读文件、不写文件，所有常量经注入获得
// ==========================================

pub mod demand_estimator;
pub mod eligibility;
pub mod forecast_core;
pub mod intake_projector;
pub mod orchestrator;
pub mod period_resolver;
pub mod product_rollup;
pub mod result_assembler;

// 重导出核心引擎
pub use demand_estimator::DemandEstimator;
pub use eligibility::{EligibilityEngine, EligibilityFlags, EligibilityOutcome};
pub use forecast_core::{ForecastCore, SumCount};
pub use intake_projector::IntakeProjector;
pub use orchestrator::ForecastOrchestrator;
pub use period_resolver::PeriodResolver;
pub use product_rollup::ProductRollup;
pub use result_assembler::ResultAssembler;
