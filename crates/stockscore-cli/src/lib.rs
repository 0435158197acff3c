//! StockScore CLI 도구.
//!
//! 이 crate는 다음 기능을 제공합니다:
//! - 월 투자 자본 입력 및 검증
//! - 다종목 MA50 근접도 분석 실행
//! - 스코어/배분 테이블 및 JSON 출력

pub mod commands;

pub use commands::*;
