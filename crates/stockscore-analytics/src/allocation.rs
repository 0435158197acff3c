//! 스코어 비례 자본 배분.
//!
//! 양수 스코어 종목에만 자본을 나눕니다.
//! 비율 = Score / ΣScore, 금액 = 비율 × 자본 (소수점 2자리 반올림).

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use stockscore_core::{AllocationRecord, ScoreResult};
use tracing::{debug, error};

/// 배분 금액 소수점 자리수.
const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// 스코어 결과를 자본 배분 레코드로 변환합니다.
///
/// - 스코어가 0 이하인 종목은 제외
/// - 남은 종목이 없거나 스코어 합이 유한한 양수가 아니면 빈 목록
/// - 출력 순서는 입력 순서를 따름
///
/// 반올림 때문에 금액 합은 자본과 몇 센트 다를 수 있습니다.
pub fn allocate(results: &[ScoreResult], capital: Decimal) -> Vec<AllocationRecord> {
    let positive: Vec<&ScoreResult> = results.iter().filter(|r| r.score > 0.0).collect();
    if positive.is_empty() {
        debug!("양수 스코어 종목 없음, 배분 생략");
        return Vec::new();
    }

    let total: f64 = positive.iter().map(|r| r.score).sum();
    if !total.is_finite() || total <= 0.0 {
        error!(total_score = total, "스코어 합이 올바르지 않아 배분할 수 없습니다");
        return Vec::new();
    }

    positive
        .into_iter()
        .map(|result| {
            let allocation_pct = result.score / total;
            AllocationRecord {
                result: result.clone(),
                allocation_pct,
                allocation_amount: amount_for(allocation_pct, capital),
            }
        })
        .collect()
}

fn amount_for(pct: f64, capital: Decimal) -> Decimal {
    let mut amount = Decimal::from_f64(pct)
        .and_then(|pct| pct.checked_mul(capital))
        .unwrap_or_else(|| {
            error!(pct = pct, capital = %capital, "배분 금액 계산 실패, 0으로 처리");
            Decimal::ZERO
        })
        .round_dp(AMOUNT_DECIMAL_PLACES);
    amount.rescale(AMOUNT_DECIMAL_PLACES);
    amount
}
