//! 다종목 배치 실행기.
//!
//! 종목별 스코어링을 제한된 동시 실행 수로 병렬 처리합니다.
//! 결과는 입력 티커 순서를 그대로 유지하며, 한 종목의 실패는 다른 종목에
//! 영향을 주지 않습니다 (실패 종목은 0점 폴백 레코드).

use std::time::Instant;

use futures::stream::{self, StreamExt};
use rust_decimal::Decimal;
use serde::Serialize;
use stockscore_core::{AllocationRecord, ScoreResult};
use tracing::info;

use crate::allocation::allocate;
use crate::scoring::MovingAverageScorer;

/// 한 번의 분석 실행 결과.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// 입력 티커 순서의 스코어 결과 (티커당 하나)
    pub results: Vec<ScoreResult>,
    /// 양수 스코어 종목의 자본 배분
    pub allocations: Vec<AllocationRecord>,
    /// 배분에 사용한 자본
    pub capital: Decimal,
}

impl AnalysisReport {
    /// 양수 스코어(매수 신호) 종목이 하나라도 있는지 여부.
    pub fn has_signal(&self) -> bool {
        self.results.iter().any(ScoreResult::is_actionable)
    }

    /// 양수 스코어 결과를 스코어 내림차순으로 반환합니다.
    pub fn ranked(&self) -> Vec<&ScoreResult> {
        let mut ranked: Vec<&ScoreResult> =
            self.results.iter().filter(|r| r.is_actionable()).collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// 배분 레코드를 스코어 내림차순으로 반환합니다.
    pub fn ranked_allocations(&self) -> Vec<&AllocationRecord> {
        let mut ranked: Vec<&AllocationRecord> = self.allocations.iter().collect();
        ranked.sort_by(|a, b| b.score().total_cmp(&a.score()));
        ranked
    }
}

/// 모든 티커를 스코어링합니다.
///
/// 동시에 처리되는 종목 수는 `concurrency`를 넘지 않습니다 (최소 1).
pub async fn score_all(
    scorer: &MovingAverageScorer,
    tickers: &[String],
    concurrency: usize,
) -> Vec<ScoreResult> {
    stream::iter(tickers.iter().map(|ticker| scorer.score(ticker)))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// 스코어링과 자본 배분을 한 번에 실행합니다.
pub async fn analyze(
    scorer: &MovingAverageScorer,
    tickers: &[String],
    capital: Decimal,
    concurrency: usize,
) -> AnalysisReport {
    let start_time = Instant::now();

    let results = score_all(scorer, tickers, concurrency).await;
    let allocations = allocate(&results, capital);

    let actionable = results.iter().filter(|r| r.is_actionable()).count();
    info!(
        provider = scorer.provider().name(),
        tickers = results.len(),
        actionable = actionable,
        allocated = allocations.len(),
        capital = %capital,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "분석 완료"
    );

    AnalysisReport {
        results,
        allocations,
        capital,
    }
}
