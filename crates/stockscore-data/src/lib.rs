//! 시세 데이터 조회.
//!
//! 이 crate는 다음을 제공합니다:
//! - 회사명 조회와 일봉 종가 조회를 묶은 `MarketDataProvider` 트레이트
//! - Yahoo Finance 구현체
//! - 테스트/오프라인용 인메모리 구현체

pub mod error;
pub mod provider;

pub use error::{DataError, Result};
pub use provider::{
    normalize_closes, DailyClose, InMemoryMarketData, MarketDataProvider, YahooMarketData,
};
