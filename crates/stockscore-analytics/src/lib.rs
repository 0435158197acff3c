//! MA50 근접도 스코어링 엔진.
//!
//! 이 크레이트는 다음을 제공합니다:
//! - 기술적 지표 (단순 이동평균)
//! - 종목별 스코어 파이프라인 (조회 → MA50 → 하위 지표 → 검증)
//! - 스코어 비례 자본 배분
//! - 동시 실행 수가 제한된 배치 실행기
//!
//! # 사용 예시
//!
//! ```ignore
//! use std::sync::Arc;
//! use stockscore_analytics::{analyze, MovingAverageScorer};
//! use stockscore_core::AppConfig;
//! use stockscore_data::YahooMarketData;
//!
//! let config = AppConfig::load_default()?;
//! let scorer = MovingAverageScorer::new(
//!     Arc::new(YahooMarketData::new()?),
//!     config.scoring,
//!     config.market_data,
//! );
//! let report = analyze(&scorer, &config.portfolio.tickers, capital, 8).await;
//! ```

pub mod allocation;
pub mod batch;
pub mod indicators;
pub mod scoring;

pub use allocation::allocate;
pub use batch::{analyze, score_all, AnalysisReport};
pub use indicators::{IndicatorError, IndicatorResult, SmaParams, TrendIndicators};
pub use scoring::{
    score_series, validate, MovingAverageScorer, ScoreComponents, ScoringError, ScoringResult,
};
