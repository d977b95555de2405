// ==========================================
// 零售进货预测 - 预测参数（调用方提供）
// ==========================================
// 来源: JSON 参数文件 / 调用方直接构造
// 周期统一为 YYYYWW 整数
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::types::PeriodRange;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastParameters {
    /// 历史区间（闭区间），决定 HRN
    pub historical_horizon_start: i64,
    pub historical_horizon_end: i64,

    /// 预期进货区间（闭区间）
    pub expected_horizon_start: i64,
    pub expected_horizon_end: i64,

    /// 最低可接受毛利（小数，如 0.35）
    pub min_acceptable_margin: f64,

    pub financial_year: i32,
}

impl ForecastParameters {
    /// 从 JSON 文件加载并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> ConfigResult<Self> {
        let params: ForecastParameters = serde_json::from_str(raw)?;
        params.validate()?;
        Ok(params)
    }

    /// 校验参数
    ///
    /// # 规则
    /// - 四个周期均为 YYYYWW，周在 1..=53
    /// - 区间起点 ≤ 终点
    /// - 毛利为有限非负数
    /// - 财年为正
    pub fn validate(&self) -> ConfigResult<()> {
        let periods = [
            ("historical_horizon_start", self.historical_horizon_start),
            ("historical_horizon_end", self.historical_horizon_end),
            ("expected_horizon_start", self.expected_horizon_start),
            ("expected_horizon_end", self.expected_horizon_end),
        ];
        for (name, value) in periods {
            let week = value % 100;
            if value <= 0 || !(1..=53).contains(&week) {
                return Err(ConfigError::InvalidPeriod {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if self.historical_horizon_start > self.historical_horizon_end {
            return Err(ConfigError::InvalidRange {
                name: "historical_horizon".to_string(),
                start: self.historical_horizon_start,
                end: self.historical_horizon_end,
            });
        }
        if self.expected_horizon_start > self.expected_horizon_end {
            return Err(ConfigError::InvalidRange {
                name: "expected_horizon".to_string(),
                start: self.expected_horizon_start,
                end: self.expected_horizon_end,
            });
        }

        if !self.min_acceptable_margin.is_finite() || self.min_acceptable_margin < 0.0 {
            return Err(ConfigError::InvalidMargin(self.min_acceptable_margin));
        }

        if self.financial_year <= 0 {
            return Err(ConfigError::InvalidFinancialYear(self.financial_year));
        }

        Ok(())
    }

    pub fn historical_horizon(&self) -> PeriodRange {
        PeriodRange::new(self.historical_horizon_start, self.historical_horizon_end)
    }

    pub fn expected_horizon(&self) -> PeriodRange {
        PeriodRange::new(self.expected_horizon_start, self.expected_horizon_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ForecastParameters {
        ForecastParameters {
            historical_horizon_start: 202440,
            historical_horizon_end: 202533,
            expected_horizon_start: 202529,
            expected_horizon_end: 202552,
            min_acceptable_margin: 0.35,
            financial_year: 2025,
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_range() {
        let mut params = sample();
        params.historical_horizon_start = 202540;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_validate_bad_week() {
        let mut params = sample();
        params.expected_horizon_end = 202560;
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn test_validate_bad_margin() {
        let mut params = sample();
        params.min_acceptable_margin = f64::NAN;
        assert!(matches!(params.validate(), Err(ConfigError::InvalidMargin(_))));
    }

    #[test]
    fn test_from_json_str() {
        let raw = r#"{
            "historical_horizon_start": 202440,
            "historical_horizon_end": 202533,
            "expected_horizon_start": 202529,
            "expected_horizon_end": 202552,
            "min_acceptable_margin": 0.35,
            "financial_year": 2025
        }"#;
        let params = ForecastParameters::from_json_str(raw).unwrap();
        assert_eq!(params, sample());
    }

    #[test]
    fn test_from_json_str_missing_field() {
        let raw = r#"{ "historical_horizon_start": 202440 }"#;
        assert!(matches!(
            ForecastParameters::from_json_str(raw),
            Err(ConfigError::ParseError(_))
        ));
    }
}
