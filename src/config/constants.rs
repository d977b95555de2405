// ==========================================
// 零售进货预测 - 固定业务常量
// ==========================================
// 非用户可配置；以结构体注入引擎，测试可替换
// ==========================================

use crate::domain::types::HorizonKind;
use serde::{Deserialize, Serialize};

// ==========================================
// HorizonSpec - 推算周期参数
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HorizonSpec {
    pub kind: HorizonKind,
    pub length_weeks: f64,
    pub diminishing_return: f64,
    pub required_clearance: f64, // 周期末须售罄比例
}

// ==========================================
// ForecastConstants
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastConstants {
    /// OPP: 库存+销量 ≥ SKU 区间均销 × stock_threshold
    pub stock_threshold: f64,
    /// OPP / 区间统计: 库存+销量 下限
    pub min_stock_plus_sales: f64,
    /// GP: 毛利 ≥ min_acceptable_margin × margin_tolerance
    pub margin_tolerance: f64,

    pub confidence: f64,
    pub low_data_confidence: f64,
    pub min_data_points: usize,
    pub data_reduction_threshold: f64,

    pub horizons: Vec<HorizonSpec>,
}

impl Default for ForecastConstants {
    fn default() -> Self {
        Self {
            stock_threshold: 1.0,
            min_stock_plus_sales: 2.0,
            margin_tolerance: 0.9,
            confidence: 0.85,
            low_data_confidence: 0.7,
            min_data_points: 4,
            data_reduction_threshold: 0.5,
            horizons: vec![
                HorizonSpec {
                    kind: HorizonKind::Season,
                    length_weeks: 26.0,
                    diminishing_return: 0.95,
                    required_clearance: 0.9,
                },
                HorizonSpec {
                    kind: HorizonKind::Quarter,
                    length_weeks: 13.0,
                    diminishing_return: 0.98,
                    required_clearance: 0.8,
                },
                HorizonSpec {
                    kind: HorizonKind::NineWeek,
                    length_weeks: 8.0,
                    diminishing_return: 0.98,
                    required_clearance: 0.7,
                },
            ],
        }
    }
}

impl ForecastConstants {
    pub fn horizon(&self, kind: HorizonKind) -> Option<&HorizonSpec> {
        self.horizons.iter().find(|h| h.kind == kind)
    }
}
