//! Yahoo Finance Provider.
//!
//! `yahoo_finance_api` 크레이트로 일봉 종가와 회사명을 조회합니다.
//! 회사명 조회(`get_ticker_info`)는 crumb 토큰 캐시 때문에 `&mut` 접근이
//! 필요하므로, 동시 조회마다 커넥터 풀에서 별도 커넥터를 빌려 사용합니다.

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::debug;
use yahoo_finance_api::YahooConnector;

use super::pool::ConnectorPool;
use super::{normalize_closes, DailyClose, MarketDataProvider};
use crate::error::{DataError, Result};

/// Yahoo Finance 일봉 간격.
const DAILY_INTERVAL: &str = "1d";

/// 기본 종목 정보 커넥터 풀 크기.
pub const DEFAULT_POOL_SIZE: usize = 8;

/// Yahoo Finance Provider.
pub struct YahooMarketData {
    /// 가격 조회용 커넥터 (`&self`로 동시 사용 가능)
    connector: YahooConnector,
    /// 종목 정보 조회용 커넥터 풀
    info_connectors: ConnectorPool<YahooConnector>,
}

impl YahooMarketData {
    pub fn new() -> Result<Self> {
        Self::with_pool_size(DEFAULT_POOL_SIZE)
    }

    /// 종목 정보 커넥터를 최대 `pool_size`개까지 유지하는 Provider를 생성합니다.
    ///
    /// 배치의 동시 조회 수(`max_concurrency`)와 같게 두면 회사명 조회끼리
    /// 기다리지 않습니다.
    pub fn with_pool_size(pool_size: usize) -> Result<Self> {
        Ok(Self {
            connector: connect()?,
            info_connectors: ConnectorPool::new(pool_size.max(1)),
        })
    }
}

fn connect() -> Result<YahooConnector> {
    YahooConnector::new()
        .map_err(|e| DataError::ConnectionError(format!("Yahoo Finance 연결 실패: {}", e)))
}

#[async_trait]
impl MarketDataProvider for YahooMarketData {
    fn name(&self) -> &str {
        "Yahoo Finance"
    }

    async fn company_name(&self, ticker: &str) -> Result<Option<String>> {
        let summary = {
            let mut connector = self.info_connectors.checkout(connect)?;
            connector.get_ticker_info(ticker).await.map_err(|e| {
                DataError::FetchError(format!("Yahoo ticker info 조회 실패 ({}): {}", ticker, e))
            })?
        };

        let name = summary
            .quote_summary
            .and_then(|qs| qs.result)
            .and_then(|r| r.into_iter().next())
            .and_then(|data| data.quote_type)
            .and_then(|qt| qt.long_name.or(qt.short_name))
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        debug!(ticker = ticker, name = ?name, "회사명 조회 완료");
        Ok(name)
    }

    async fn daily_closes(&self, ticker: &str, days: u32) -> Result<Vec<DailyClose>> {
        let end = OffsetDateTime::now_utc();
        let start = end - time::Duration::days(i64::from(days));

        debug!(ticker = ticker, days = days, "Yahoo Finance API 호출");

        let response = self
            .connector
            .get_quote_history_interval(ticker, start, end, DAILY_INTERVAL)
            .await
            .map_err(|e| {
                DataError::FetchError(format!("Yahoo Finance API 오류 ({}): {}", ticker, e))
            })?;

        let quotes = response
            .quotes()
            .map_err(|e| DataError::ParseError(format!("Quote 파싱 오류 ({}): {}", ticker, e)))?;

        let closes: Vec<DailyClose> = quotes
            .iter()
            .filter_map(|q| {
                let date = chrono::DateTime::from_timestamp(q.timestamp as i64, 0)?.date_naive();
                Some(DailyClose::new(date, q.close))
            })
            .collect();

        Ok(normalize_closes(closes))
    }
}
