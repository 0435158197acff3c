//! 스코어 하위 지표 공식.
//!
//! 모든 함수는 순수 함수이며, 같은 입력에 대해 비트 단위로 같은 값을 돌려줍니다.

use stockscore_core::ScoringConfig;

/// 현재가와 이동평균의 부호 있는 상대 거리.
///
/// d = (현재가 - MA) / MA. 양수면 MA 위, 음수면 MA 아래.
pub fn distance(current_price: f64, moving_average: f64) -> f64 {
    (current_price - moving_average) / moving_average
}

/// 이동평균의 최근 기울기 (비율).
///
/// 정의된 이동평균 값이 `lag`개 이상이면 최신 값과 끝에서 `lag`번째 값의
/// 변화율을, 그보다 적으면 0을 반환합니다.
pub fn ma_slope(moving_averages: &[f64], lag: usize) -> f64 {
    let len = moving_averages.len();
    if lag == 0 || len < lag {
        return 0.0;
    }

    let latest = moving_averages[len - 1];
    let past = moving_averages[len - lag];
    (latest - past) / past
}

/// 평탄도: 기울기 절대값이 임계값에 도달하면 0이 되는 선형 감소.
pub fn flatness(slope: f64, threshold: f64) -> f64 {
    (1.0 - slope.abs() / threshold).max(0.0)
}

/// 근접도: d = 0에서 정확히 1인 가우시안.
pub fn proximity(distance: f64, sigma: f64) -> f64 {
    (-distance.powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// 보너스: 현재가가 MA 아래(d < 0)일 때만 `1 + γ·(-d)`.
///
/// 상한이 없습니다. MA에서 멀리 떨어질수록 계속 커집니다.
pub fn bonus(distance: f64, gamma: f64) -> f64 {
    if distance < 0.0 {
        1.0 + gamma * (-distance)
    } else {
        1.0
    }
}

/// 한 종목의 하위 지표 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreComponents {
    /// MA 기울기
    pub slope: f64,
    /// 현재가-MA 상대 거리
    pub distance: f64,
    pub flatness: f64,
    pub proximity: f64,
    pub bonus: f64,
    /// flatness × proximity × bonus
    pub score: f64,
}

impl ScoreComponents {
    /// 현재가와 정의된 이동평균 시계열(오름차순)로 하위 지표를 계산합니다.
    ///
    /// `moving_averages`의 마지막 값을 현재 MA로 사용하므로 비어 있으면 안 됩니다.
    pub fn compute(current_price: f64, moving_averages: &[f64], config: &ScoringConfig) -> Self {
        let moving_average = moving_averages.last().copied().unwrap_or(f64::NAN);

        let slope = ma_slope(moving_averages, config.slope_lag);
        let flatness = flatness(slope, config.flatness_threshold);
        let distance = distance(current_price, moving_average);
        let proximity = proximity(distance, config.proximity_sigma);
        let bonus = bonus(distance, config.bonus_gamma);

        Self {
            slope,
            distance,
            flatness,
            proximity,
            bonus,
            score: flatness * proximity * bonus,
        }
    }
}
