//! 종목별 MA50 근접도 스코어링.
//!
//! # 하위 지표
//!
//! 1. **Flatness**: MA50의 최근 기울기가 0에 가까울수록 1, 임계값(5%) 이상이면 0
//! 2. **Proximity**: 현재가와 MA50의 상대 거리 d에 대한 가우시안 (σ = 0.03)
//! 3. **Bonus**: 현재가가 MA50 아래일 때 `1 + γ·(-d)`, 그 외 1
//!
//! 최종 스코어 = Flatness × Proximity × Bonus
//!
//! 모든 결과는 반환 전에 [`validate`]를 거쳐 안전한 범위로 보정됩니다.

pub mod metrics;
pub mod scorer;
pub mod validator;

use thiserror::Error;

use crate::indicators::IndicatorError;
use stockscore_data::DataError;

pub use metrics::ScoreComponents;
pub use scorer::{score_series, MovingAverageScorer};
pub use validator::validate;

/// 스코어 계산 오류.
///
/// 스코어러 내부에서만 사용되며, 밖으로는 0점 폴백 레코드로 변환됩니다.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// 시세 데이터 조회 실패
    #[error("시세 데이터 조회 실패: {0}")]
    Data(#[from] DataError),

    /// 지표 계산 실패
    #[error("지표 계산 실패: {0}")]
    Indicator(#[from] IndicatorError),

    /// 종가 데이터 부족
    #[error("데이터 부족: 필요 {required}개, 제공 {provided}개")]
    InsufficientHistory { required: usize, provided: usize },

    /// 이동평균이 하나도 정의되지 않음
    #[error("MA{window}가 계산되지 않았습니다")]
    EmptyMovingAverage { window: usize },
}

/// 스코어 계산 결과 타입.
pub type ScoringResult<T> = Result<T, ScoringError>;
