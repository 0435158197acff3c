//! 스코어링 시스템의 에러 타입.
//!
//! 종목별 스코어링 실패는 에러로 전파되지 않고 폴백 레코드로 흡수됩니다.
//! 여기 정의된 타입은 설정 로드, 입력 검증처럼 배치 바깥에서
//! 발생하는 실패에 사용됩니다.

use thiserror::Error;

/// 핵심 에러.
#[derive(Debug, Error)]
pub enum CoreError {
    /// 설정 에러
    #[error("설정 에러: {0}")]
    Config(String),

    /// 잘못된 입력
    #[error("잘못된 입력: {0}")]
    InvalidInput(String),
}

/// 핵심 작업을 위한 Result 타입.
pub type CoreResult<T> = Result<T, CoreError>;

impl From<config::ConfigError> for CoreError {
    fn from(err: config::ConfigError) -> Self {
        CoreError::Config(err.to_string())
    }
}
