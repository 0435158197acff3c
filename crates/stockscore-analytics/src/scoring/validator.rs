//! 스코어 결과 검증.
//!
//! 잘못된 상위 데이터나 공식의 경계 상황(0에 가까운 MA 등)에서 나온 값을
//! 안전한 범위로 보정합니다. 보정은 에러로 전파되지 않고 `error` 로그로만 남습니다.
//!
//! 규칙 (서로 독립적이며 적용 순서와 무관):
//! - 현재가/MA50이 없거나 0 이하 → Score = 0 (가격 값 자체는 유지)
//! - Flatness, Proximity → [0, 1]로 클램프
//! - Bonus < 1 → 1
//! - Score가 NaN/무한대 또는 음수 → 0

use stockscore_core::ScoreResult;
use tracing::error;

/// 스코어 결과를 검증하고 보정된 레코드를 반환합니다.
pub fn validate(mut result: ScoreResult) -> ScoreResult {
    if !result.has_valid_prices() {
        error!(
            ticker = %result.ticker,
            current_price = ?result.current_price,
            ma50 = ?result.ma50,
            "현재가 또는 MA50 값이 올바르지 않습니다"
        );
        result.score = 0.0;
    }

    if !is_unit_interval(result.flatness) {
        error!(ticker = %result.ticker, flatness = result.flatness, "Flatness 범위 초과");
        result.flatness = clamp_unit(result.flatness);
    }

    if !is_unit_interval(result.proximity) {
        error!(ticker = %result.ticker, proximity = result.proximity, "Proximity 범위 초과");
        result.proximity = clamp_unit(result.proximity);
    }

    // NaN도 여기서 걸러짐
    if !(result.bonus >= 1.0) {
        error!(ticker = %result.ticker, bonus = result.bonus, "Bonus가 1보다 작습니다");
        result.bonus = 1.0;
    }

    if !result.score.is_finite() {
        error!(ticker = %result.ticker, score = result.score, "Score가 유한하지 않습니다");
        result.score = 0.0;
    } else if result.score < 0.0 {
        error!(ticker = %result.ticker, score = result.score, "Score가 음수입니다");
        result.score = 0.0;
    }

    result
}

fn is_unit_interval(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
