//! # StockScore Core
//!
//! MA50 근접도 스코어링 시스템의 핵심 도메인 타입을 제공합니다.
//!
//! 이 크레이트는 다른 모든 크레이트가 공유하는 기본 타입을 제공합니다:
//! - 종목별 스코어 레코드 (`ScoreResult`)
//! - 자본 배분 레코드 (`AllocationRecord`)
//! - 에러 분류
//! - 설정 관리
//! - 로깅 인프라

pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

pub use self::config::*;
pub use domain::*;
pub use error::*;
pub use logging::*;
