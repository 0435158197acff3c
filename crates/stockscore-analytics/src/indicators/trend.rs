//! 추세 지표 (Trend Indicators).
//!
//! 이동평균 기반의 추세 지표를 제공합니다.
//! - SMA (Simple Moving Average)

use super::{IndicatorError, IndicatorResult};

/// SMA 파라미터.
#[derive(Debug, Clone, Copy)]
pub struct SmaParams {
    /// 이동평균 기간.
    pub period: usize,
}

impl Default for SmaParams {
    fn default() -> Self {
        Self { period: 50 }
    }
}

/// 추세 지표 계산기.
#[derive(Debug, Default)]
pub struct TrendIndicators;

impl TrendIndicators {
    /// 새로운 추세 지표 계산기 생성.
    pub fn new() -> Self {
        Self
    }

    /// 단순 이동평균 (SMA) 계산.
    ///
    /// SMA = (P1 + P2 + ... + Pn) / n
    ///
    /// # 인자
    /// * `prices` - 가격 데이터 (날짜 오름차순)
    /// * `params` - SMA 파라미터
    ///
    /// # 반환
    /// 각 시점의 SMA 값 (처음 period-1개는 None)
    pub fn sma(&self, prices: &[f64], params: SmaParams) -> IndicatorResult<Vec<Option<f64>>> {
        let period = params.period;

        if period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "기간은 0보다 커야 합니다".to_string(),
            ));
        }

        if prices.len() < period {
            return Err(IndicatorError::InsufficientData {
                required: period,
                provided: prices.len(),
            });
        }

        let divisor = period as f64;
        let result = (0..prices.len())
            .map(|i| {
                if i + 1 < period {
                    None
                } else {
                    let sum: f64 = prices[i + 1 - period..=i].iter().sum();
                    Some(sum / divisor)
                }
            })
            .collect();

        Ok(result)
    }

    /// 정의된 SMA 값만 추린 시계열.
    ///
    /// 앞쪽 period-1개의 미정의 값을 제거합니다.
    pub fn sma_defined(&self, prices: &[f64], params: SmaParams) -> IndicatorResult<Vec<f64>> {
        Ok(self.sma(prices, params)?.into_iter().flatten().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_prices() -> Vec<f64> {
        vec![
            100.0, 102.0, 101.0, 103.0, 105.0, 104.0, 106.0, 108.0, 107.0, 109.0,
        ]
    }

    #[test]
    fn test_sma_calculation() {
        let trend = TrendIndicators::new();
        let prices = sample_prices();

        let sma = trend.sma(&prices, SmaParams { period: 5 }).unwrap();

        assert_eq!(sma.len(), prices.len());
        // 처음 4개는 None (데이터 부족)
        assert!(sma[0].is_none());
        assert!(sma[3].is_none());
        // (100 + 102 + 101 + 103 + 105) / 5
        assert_eq!(sma[4], Some(102.2));
        // (104 + 106 + 108 + 107 + 109) / 5
        assert_eq!(sma[9], Some(106.8));
    }

    #[test]
    fn test_sma_defined_drops_leading_values() {
        let trend = TrendIndicators::new();
        let prices = sample_prices();

        let defined = trend.sma_defined(&prices, SmaParams { period: 5 }).unwrap();

        assert_eq!(defined.len(), prices.len() - 4);
    }

    #[test]
    fn test_sma_exact_window() {
        let trend = TrendIndicators::new();
        let prices = vec![100.0; 50];

        let defined = trend.sma_defined(&prices, SmaParams::default()).unwrap();

        assert_eq!(defined, vec![100.0]);
    }

    #[test]
    fn test_insufficient_data_error() {
        let trend = TrendIndicators::new();
        let prices = vec![100.0, 101.0];

        let result = trend.sma(&prices, SmaParams { period: 20 });
        assert!(matches!(
            result,
            Err(IndicatorError::InsufficientData {
                required: 20,
                provided: 2
            })
        ));
    }

    #[test]
    fn test_zero_period_rejected() {
        let trend = TrendIndicators::new();

        let result = trend.sma(&sample_prices(), SmaParams { period: 0 });
        assert!(matches!(result, Err(IndicatorError::InvalidParameter(_))));
    }
}
