// ==========================================
// 零售进货预测 - 领域类型定义
// ==========================================
// 周期键: YearWeek = 财年 × 100 + 周（如 202440）
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 财务周期 (Period / YearWeek)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Period(i64);

impl Period {
    pub fn new(year_week: i64) -> Self {
        Self(year_week)
    }

    /// 由财年与周组合周期键
    ///
    /// # 返回
    /// - Some(Period): year*100 + week
    /// - None: 任一部分缺失、非有限或非整数；周不在 0..=99；组合溢出
    pub fn from_parts(year: Option<f64>, week: Option<f64>) -> Option<Self> {
        let (year, week) = (year?, week?);
        if !year.is_finite() || !week.is_finite() || year.fract() != 0.0 || week.fract() != 0.0 {
            return None;
        }
        if !(0.0..=99.0).contains(&week) {
            return None;
        }
        // 超出 i64 的 year 在转换时饱和，随后的乘法必然溢出
        (year as i64)
            .checked_mul(100)?
            .checked_add(week as i64)
            .map(Self)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn year(&self) -> i64 {
        self.0 / 100
    }

    pub fn week(&self) -> i64 {
        self.0 % 100
    }
}

impl From<i64> for Period {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// 周期区间（闭区间）
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRange {
    pub start: Period,
    pub end: Period,
}

impl PeriodRange {
    pub fn new(start: impl Into<Period>, end: impl Into<Period>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// 边界包含: start ≤ period ≤ end
    pub fn contains(&self, period: Period) -> bool {
        self.start <= period && period <= self.end
    }

    /// 缺失周期永远不落在区间内
    pub fn contains_opt(&self, period: Option<Period>) -> bool {
        period.map(|p| self.contains(p)).unwrap_or(false)
    }
}

impl fmt::Display for PeriodRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

// ==========================================
// 推算周期 (Horizon Kind)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HorizonKind {
    Season,   // 季（26 周）
    Quarter,  // 季度（13 周）
    NineWeek, // 9 周窗口（按 8 周计）
}

impl fmt::Display for HorizonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizonKind::Season => write!(f, "SEASON"),
            HorizonKind::Quarter => write!(f, "QUARTER"),
            HorizonKind::NineWeek => write!(f, "NINE_WEEK"),
        }
    }
}

// ==========================================
// 需求估算置信状态 (Estimate Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateStatus {
    Confident,        // 数据充足，按 confidence 折算
    LowConfidence,    // 数据不足，按 low_data_confidence 折算
    InsufficientData, // 无合格周，无法估算
}

impl fmt::Display for EstimateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EstimateStatus::Confident => write!(f, "CONFIDENT"),
            EstimateStatus::LowConfidence => write!(f, "LOW_CONFIDENCE"),
            EstimateStatus::InsufficientData => write!(f, "INSUFFICIENT_DATA"),
        }
    }
}
