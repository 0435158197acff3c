//! 종목별 스코어 파이프라인.
//!
//! 1. 회사명 조회 (실패 시 티커 사용)
//! 2. 최근 N일 종가 조회 → 데이터 부족 시 폴백
//! 3. 50일 SMA 계산, 미정의 값 제거 → 비어 있으면 폴백
//! 4. 하위 지표 계산 → 레코드 조립 → 검증

use std::sync::Arc;

use stockscore_core::{ticker_span, MarketDataConfig, ScoreResult, ScoringConfig};
use stockscore_data::MarketDataProvider;
use tracing::{debug, error, Instrument};

use super::metrics::ScoreComponents;
use super::validator::validate;
use super::{ScoringError, ScoringResult};
use crate::indicators::{SmaParams, TrendIndicators};

/// 종가 시계열 하나로 검증된 스코어 결과를 계산합니다.
///
/// 네트워크와 무관한 순수 계산 단계입니다. 종가는 날짜 오름차순이어야 합니다.
///
/// # 인자
/// * `ticker` - 티커 심볼
/// * `company` - 표시용 회사명
/// * `closes` - 일봉 종가
/// * `config` - 스코어 공식 상수
/// * `min_data_points` - 필요한 최소 종가 개수
pub fn score_series(
    ticker: &str,
    company: &str,
    closes: &[f64],
    config: &ScoringConfig,
    min_data_points: usize,
) -> ScoringResult<ScoreResult> {
    let required = min_data_points.max(config.ma_window);
    if closes.is_empty() || closes.len() < required {
        return Err(ScoringError::InsufficientHistory {
            required,
            provided: closes.len(),
        });
    }

    let moving_averages = TrendIndicators::new().sma_defined(
        closes,
        SmaParams {
            period: config.ma_window,
        },
    )?;

    let (Some(&current_price), Some(&ma50)) = (closes.last(), moving_averages.last()) else {
        return Err(ScoringError::EmptyMovingAverage {
            window: config.ma_window,
        });
    };

    let components = ScoreComponents::compute(current_price, &moving_averages, config);

    debug!(
        ticker = ticker,
        current_price = current_price,
        ma50 = ma50,
        slope = components.slope,
        distance = components.distance,
        flatness = components.flatness,
        proximity = components.proximity,
        bonus = components.bonus,
        score = components.score,
        "스코어 계산 완료"
    );

    Ok(validate(ScoreResult {
        ticker: ticker.to_string(),
        company: company.to_string(),
        current_price: Some(current_price),
        ma50: Some(ma50),
        distance_pct: components.distance,
        flatness: components.flatness,
        proximity: components.proximity,
        bonus: components.bonus,
        score: components.score,
    }))
}

/// MA50 근접도 스코어러.
///
/// 종목 간 공유 상태는 Provider뿐이며, 각 호출은 서로 독립적입니다.
pub struct MovingAverageScorer {
    provider: Arc<dyn MarketDataProvider>,
    scoring: ScoringConfig,
    market_data: MarketDataConfig,
}

impl MovingAverageScorer {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        scoring: ScoringConfig,
        market_data: MarketDataConfig,
    ) -> Self {
        Self {
            provider,
            scoring,
            market_data,
        }
    }

    /// 시세 데이터 Provider.
    pub fn provider(&self) -> &dyn MarketDataProvider {
        self.provider.as_ref()
    }

    /// 티커 하나를 스코어링합니다.
    ///
    /// 실패하지 않습니다. 조회나 계산이 실패하면 에러를 로그로 남기고
    /// 0점 폴백 레코드를 반환합니다.
    pub async fn score(&self, ticker: &str) -> ScoreResult {
        async {
            match self.try_score(ticker).await {
                Ok(result) => result,
                Err(e) => {
                    error!(ticker = ticker, error = %e, "스코어 계산 실패, 0점 처리");
                    validate(ScoreResult::fallback(ticker))
                }
            }
        }
        .instrument(ticker_span!("score_ticker", ticker))
        .await
    }

    async fn try_score(&self, ticker: &str) -> ScoringResult<ScoreResult> {
        let company = self.resolve_company(ticker).await;

        let closes = self
            .provider
            .daily_closes(ticker, self.market_data.history_days)
            .await?;
        let prices: Vec<f64> = closes.iter().map(|c| c.close).collect();

        score_series(
            ticker,
            &company,
            &prices,
            &self.scoring,
            self.market_data.min_data_points,
        )
    }

    /// 회사명 조회. long name → short name → 티커 순으로 사용합니다.
    async fn resolve_company(&self, ticker: &str) -> String {
        match self.provider.company_name(ticker).await {
            Ok(Some(name)) => name,
            Ok(None) => ticker.to_string(),
            Err(e) => {
                error!(
                    ticker = ticker,
                    provider = self.provider.name(),
                    error = %e,
                    "회사명 조회 실패, 티커로 대체"
                );
                ticker.to_string()
            }
        }
    }
}
