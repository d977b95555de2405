// ==========================================
// 零售进货预测 - 配置错误类型
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("参数文件读取失败 ({path}): {message}")]
    ReadError { path: String, message: String },

    #[error("参数解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("区间无效 ({name}): 起点 {start} 晚于终点 {end}")]
    InvalidRange { name: String, start: i64, end: i64 },

    #[error("周期格式错误 ({name}): {value}，期望 YYYYWW 且周在 1..=53")]
    InvalidPeriod { name: String, value: i64 },

    #[error("最低可接受毛利无效: {0}")]
    InvalidMargin(f64),

    #[error("财年无效: {0}")]
    InvalidFinancialYear(i32),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
