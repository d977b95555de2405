// ==========================================
// 零售进货预测 - Forecast Core 纯函数库
// ==========================================
// 职责: 安全除法、均值、取整
// 红线: 无状态、无副作用、无 I/O 操作
// ==========================================

// ==========================================
// ForecastCore - 纯函数工具类
// ==========================================
pub struct ForecastCore;

impl ForecastCore {
    /// 安全除法
    ///
    /// # 返回
    /// - Some(num / den): 分母非 0 且结果有限
    /// - None: 分母为 0 或结果非有限
    pub fn safe_divide(numerator: f64, denominator: f64) -> Option<f64> {
        if denominator == 0.0 {
            return None;
        }
        let value = numerator / denominator;
        value.is_finite().then_some(value)
    }

    /// 由 (合计, 计数) 求均值；计数为 0 时为 None
    pub fn mean(sum: f64, count: usize) -> Option<f64> {
        Self::safe_divide(sum, count as f64)
    }

    /// 四舍六入五成双
    ///
    /// # 示例
    /// ```
    /// use intake_forecast::engine::ForecastCore;
    /// assert_eq!(ForecastCore::round(419.9), 420.0);
    /// assert_eq!(ForecastCore::round(2.5), 2.0);
    /// assert_eq!(ForecastCore::round(3.5), 4.0);
    /// ```
    pub fn round(value: f64) -> f64 {
        value.round_ties_even()
    }
}

// ==========================================
// SumCount - 分组累加器
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SumCount {
    pub sum: f64,
    pub count: usize,
}

impl SumCount {
    pub fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub fn mean(&self) -> Option<f64> {
        ForecastCore::mean(self.sum, self.count)
    }
}
