//! 종목별 스코어 결과.

use serde::{Deserialize, Serialize};

/// 종목 하나에 대한 스코어링 결과.
///
/// 스코어러가 성공/실패 경로 모두에서 티커당 하나씩 생성하며,
/// 검증을 거친 뒤에는 배분기 외에는 수정하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScoreResult {
    /// 호출자가 전달한 티커 심볼
    pub ticker: String,
    /// 표시용 회사명 (조회 실패 시 티커)
    pub company: String,
    /// 최신 종가 (조회/계산 실패 시 None)
    pub current_price: Option<f64>,
    /// 최신 50일 이동평균 (조회/계산 실패 시 None)
    #[serde(rename = "MA50")]
    pub ma50: Option<f64>,
    /// (현재가 - MA50) / MA50, 실패 시 0.0
    pub distance_pct: f64,
    /// 이동평균 평탄도 [0, 1]
    pub flatness: f64,
    /// 현재가-MA50 근접도 [0, 1]
    pub proximity: f64,
    /// MA 아래 가격 보너스 (>= 1)
    pub bonus: f64,
    /// flatness × proximity × bonus
    pub score: f64,
}

impl ScoreResult {
    /// 조회 또는 계산 실패 시 사용하는 0점 레코드.
    ///
    /// 티커를 회사명으로도 사용하며, 가격은 비워 둡니다.
    pub fn fallback(ticker: impl Into<String>) -> Self {
        let ticker = ticker.into();
        Self {
            company: ticker.clone(),
            ticker,
            current_price: None,
            ma50: None,
            distance_pct: 0.0,
            flatness: 0.0,
            proximity: 0.0,
            bonus: 1.0,
            score: 0.0,
        }
    }

    /// 배분 대상(양수 스코어)인지 확인합니다.
    pub fn is_actionable(&self) -> bool {
        self.score > 0.0
    }

    /// 현재가와 MA50이 모두 존재하고 양수인지 확인합니다.
    pub fn has_valid_prices(&self) -> bool {
        matches!(
            (self.current_price, self.ma50),
            (Some(price), Some(ma)) if price > 0.0 && ma > 0.0
        )
    }
}
