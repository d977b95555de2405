// ==========================================
// 零售进货预测 - 配置层
// ==========================================
// 职责: 调用方参数加载与校验 + 固定业务常量
// 存储: JSON 参数文件（常量不落盘）
// ==========================================

pub mod constants;
pub mod error;
pub mod forecast_params;

// 重导出
pub use constants::{ForecastConstants, HorizonSpec};
pub use error::{ConfigError, ConfigResult};
pub use forecast_params::ForecastParameters;
