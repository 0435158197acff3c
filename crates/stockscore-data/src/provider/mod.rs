//! 시세 데이터 Provider.
//!
//! 스코어러는 종목마다 두 가지를 조회합니다:
//! 1. 표시용 회사명 (long name → short name 순서, 실패해도 무방)
//! 2. 최근 N일(달력 기준) 일봉 종가 (날짜 오름차순)
//!
//! 두 조회 모두 실패하거나 데이터가 부족할 수 있으며, 이를 어떻게
//! 흡수할지는 호출자가 결정합니다.

pub mod memory;
mod pool;
pub mod yahoo;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;

pub use memory::InMemoryMarketData;
pub use yahoo::YahooMarketData;

/// 하루치 종가.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyClose {
    /// 거래일
    pub date: NaiveDate,
    /// 종가
    pub close: f64,
}

impl DailyClose {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// 시세 데이터 Provider 트레이트.
///
/// 여러 워커가 하나의 인스턴스를 공유하므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider 이름.
    fn name(&self) -> &str;

    /// 티커의 표시용 회사명을 조회합니다.
    ///
    /// long name을 우선하고, 없으면 short name을 반환합니다.
    /// 둘 다 없으면 `Ok(None)`입니다.
    async fn company_name(&self, ticker: &str) -> Result<Option<String>>;

    /// 최근 `days`일(달력 기준) 동안의 일봉 종가를 날짜 오름차순으로 조회합니다.
    async fn daily_closes(&self, ticker: &str, days: u32) -> Result<Vec<DailyClose>>;
}

/// 종가 목록을 날짜 오름차순으로 정렬하고 같은 날짜는 마지막 값만 남깁니다.
///
/// 값 자체(0, 음수, NaN)는 건드리지 않습니다.
pub fn normalize_closes(mut closes: Vec<DailyClose>) -> Vec<DailyClose> {
    // 안정 정렬이므로 같은 날짜 안에서는 원래 순서가 유지됨
    closes.sort_by_key(|c| c.date);

    let mut normalized: Vec<DailyClose> = Vec::with_capacity(closes.len());
    for close in closes {
        match normalized.last_mut() {
            Some(last) if last.date == close.date => *last = close,
            _ => normalized.push(close),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    #[test]
    fn test_normalize_sorts_ascending() {
        let closes = vec![
            DailyClose::new(day(5), 10.0),
            DailyClose::new(day(1), 11.0),
            DailyClose::new(day(3), 12.0),
        ];

        let normalized = normalize_closes(closes);
        let dates: Vec<_> = normalized.iter().map(|c| c.date).collect();
        assert_eq!(dates, vec![day(1), day(3), day(5)]);
    }

    #[test]
    fn test_normalize_keeps_last_duplicate() {
        let closes = vec![
            DailyClose::new(day(2), 10.0),
            DailyClose::new(day(2), 10.5),
            DailyClose::new(day(1), 9.0),
        ];

        let normalized = normalize_closes(closes);
        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[1].close, 10.5);
    }

    #[test]
    fn test_normalize_keeps_invalid_values() {
        let closes = vec![DailyClose::new(day(1), -3.0), DailyClose::new(day(2), f64::NAN)];

        let normalized = normalize_closes(closes);
        assert_eq!(normalized[0].close, -3.0);
        assert!(normalized[1].close.is_nan());
    }
}
