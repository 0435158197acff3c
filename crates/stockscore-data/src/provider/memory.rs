//! 인메모리 Provider.
//!
//! 네트워크 없이 미리 정해 둔 회사명/종가를 돌려줍니다.
//! 종목별로 조회 실패를 주입할 수 있고, 인위적인 지연과 함께
//! 동시에 처리 중인 가격 조회 수의 최대값을 기록합니다.

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{normalize_closes, DailyClose, MarketDataProvider};
use crate::error::{DataError, Result};

#[derive(Debug, Clone, Default)]
struct TickerFixture {
    name: Option<String>,
    name_error: Option<String>,
    closes: Vec<DailyClose>,
    history_error: Option<String>,
}

/// 인메모리 시세 데이터 Provider.
#[derive(Debug, Default)]
pub struct InMemoryMarketData {
    fixtures: HashMap<String, TickerFixture>,
    latency: Option<Duration>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl InMemoryMarketData {
    pub fn new() -> Self {
        Self::default()
    }

    /// 회사명과 종가를 가진 종목을 추가합니다.
    pub fn with_ticker(
        mut self,
        ticker: impl Into<String>,
        name: Option<&str>,
        closes: Vec<DailyClose>,
    ) -> Self {
        let fixture = self.fixtures.entry(ticker.into()).or_default();
        fixture.name = name.map(str::to_string);
        fixture.closes = normalize_closes(closes);
        self
    }

    /// 회사명 조회가 실패하도록 설정합니다.
    pub fn with_name_failure(mut self, ticker: impl Into<String>, reason: &str) -> Self {
        self.fixtures.entry(ticker.into()).or_default().name_error = Some(reason.to_string());
        self
    }

    /// 가격 조회가 실패하도록 설정합니다.
    pub fn with_history_failure(mut self, ticker: impl Into<String>, reason: &str) -> Self {
        self.fixtures.entry(ticker.into()).or_default().history_error = Some(reason.to_string());
        self
    }

    /// 가격 조회마다 지연을 추가합니다.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    /// 지금까지 동시에 처리된 가격 조회 수의 최대값.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn fixture(&self, ticker: &str) -> Result<&TickerFixture> {
        self.fixtures
            .get(ticker)
            .ok_or_else(|| DataError::NotFound(ticker.to_string()))
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketData {
    fn name(&self) -> &str {
        "In-Memory"
    }

    async fn company_name(&self, ticker: &str) -> Result<Option<String>> {
        let fixture = self.fixture(ticker)?;
        if let Some(reason) = &fixture.name_error {
            return Err(DataError::FetchError(format!("{}: {}", ticker, reason)));
        }
        Ok(fixture.name.clone())
    }

    async fn daily_closes(&self, ticker: &str, days: u32) -> Result<Vec<DailyClose>> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);

        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }

        let result = self.fixture(ticker).and_then(|fixture| {
            if let Some(reason) = &fixture.history_error {
                return Err(DataError::FetchError(format!("{}: {}", ticker, reason)));
            }

            // 마지막 거래일 기준으로 조회 기간을 자름
            let closes = match fixture.closes.last() {
                Some(last) => {
                    let cutoff = last.date - ChronoDuration::days(i64::from(days));
                    fixture
                        .closes
                        .iter()
                        .filter(|c| c.date > cutoff)
                        .copied()
                        .collect()
                }
                None => Vec::new(),
            };
            Ok(closes)
        });

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
