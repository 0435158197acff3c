//! 스코어 기반 자본 배분 레코드.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::score::ScoreResult;

/// 양수 스코어 종목에 배분된 자본.
///
/// 원본 스코어 결과에 배분 비율과 금액 두 필드를 덧붙인 형태입니다.
/// 같은 배분 실행에서 나온 레코드들의 `allocation_pct` 합은 1입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationRecord {
    /// 배분 근거가 된 스코어 결과
    #[serde(flatten)]
    pub result: ScoreResult,
    /// 전체 스코어 대비 비율 [0, 1]
    pub allocation_pct: f64,
    /// 배분 금액 (소수점 2자리 반올림)
    pub allocation_amount: Decimal,
}

impl AllocationRecord {
    /// 티커 심볼.
    pub fn ticker(&self) -> &str {
        &self.result.ticker
    }

    /// 표시용 회사명.
    pub fn company(&self) -> &str {
        &self.result.company
    }

    /// 배분 근거 스코어.
    pub fn score(&self) -> f64 {
        self.result.score
    }
}
