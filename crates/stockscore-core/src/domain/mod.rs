//! 도메인 레코드.
//!
//! - `score` - 종목별 스코어 결과
//! - `allocation` - 스코어 기반 자본 배분 결과

pub mod allocation;
pub mod score;

pub use allocation::AllocationRecord;
pub use score::ScoreResult;
