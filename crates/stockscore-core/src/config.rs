//! 설정 관리.
//!
//! 설정은 다음 순서로 병합됩니다 (뒤쪽이 우선):
//! 1. 코드에 정의된 기본값
//! 2. TOML 설정 파일 (없으면 건너뜀)
//! 3. `STOCKSCORE__` 접두사 환경 변수 (예: `STOCKSCORE__PORTFOLIO__DEFAULT_CAPITAL`)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{CoreError, CoreResult};

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// 애플리케이션 설정.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// 로깅 설정
    #[serde(default)]
    pub logging: LoggingConfig,
    /// 스코어 공식 상수
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// 시세 데이터 조회 설정
    #[serde(default)]
    pub market_data: MarketDataConfig,
    /// 종목 목록 및 자본 설정
    #[serde(default)]
    pub portfolio: PortfolioConfig,
}

/// 로깅 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// 로그 레벨
    pub level: String,
    /// 로그 형식 (pretty, json, compact)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: crate::logging::DEFAULT_LOG_LEVEL.to_string(),
            format: "compact".to_string(),
        }
    }
}

/// 스코어 공식 상수.
///
/// 기본값이 스코어 공식의 기준값이며, 기본값에서의 결과는 재현 가능해야 합니다.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// 이동평균 기간
    pub ma_window: usize,
    /// 기울기 계산 시 되돌아보는 이동평균 값 개수
    pub slope_lag: usize,
    /// flatness가 0이 되는 기울기 절대값
    pub flatness_threshold: f64,
    /// proximity 가우시안의 표준편차
    pub proximity_sigma: f64,
    /// MA 아래 가격에 대한 보너스 계수
    pub bonus_gamma: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            ma_window: 50,
            slope_lag: 5,
            flatness_threshold: 0.05,
            proximity_sigma: 0.03,
            bonus_gamma: 1.0,
        }
    }
}

/// 시세 데이터 조회 설정.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// 조회할 과거 기간 (달력 기준 일수)
    pub history_days: u32,
    /// 필요한 최소 종가 개수
    pub min_data_points: usize,
    /// 동시 조회 상한
    pub max_concurrency: usize,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            history_days: 70,
            min_data_points: 50,
            max_concurrency: 8,
        }
    }
}

/// 종목 목록 및 자본 설정.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PortfolioConfig {
    /// 분석 대상 티커 목록
    pub tickers: Vec<String>,
    /// 입력이 없거나 잘못된 경우 사용할 월 투자 금액
    pub default_capital: Decimal,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            tickers: ["GRG.L", "LEG", "MAN", "LDOS", "LKQ", "KDP", "UPS", "GPC"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            default_capital: Decimal::new(3000, 0),
        }
    }
}

impl AppConfig {
    /// 파일과 환경 변수에서 설정을 로드합니다.
    ///
    /// 파일이 존재하지 않으면 기본값과 환경 변수만 사용합니다.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        dotenvy::dotenv().ok();

        let builder = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix("STOCKSCORE")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("portfolio.tickers")
                    .try_parsing(true),
            );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// 기본 경로에서 설정을 로드합니다.
    pub fn load_default() -> CoreResult<Self> {
        Self::load(DEFAULT_CONFIG_PATH)
    }

    /// 설정 값의 유효성을 검사합니다.
    pub fn validate(&self) -> CoreResult<()> {
        let scoring = &self.scoring;
        if scoring.ma_window == 0 {
            return Err(CoreError::Config("scoring.ma_window는 0보다 커야 합니다".into()));
        }
        if scoring.slope_lag == 0 {
            return Err(CoreError::Config("scoring.slope_lag는 0보다 커야 합니다".into()));
        }
        if !(scoring.flatness_threshold > 0.0) {
            return Err(CoreError::Config(format!(
                "scoring.flatness_threshold는 양수여야 합니다: {}",
                scoring.flatness_threshold
            )));
        }
        if !(scoring.proximity_sigma > 0.0) {
            return Err(CoreError::Config(format!(
                "scoring.proximity_sigma는 양수여야 합니다: {}",
                scoring.proximity_sigma
            )));
        }
        if !scoring.bonus_gamma.is_finite() {
            return Err(CoreError::Config("scoring.bonus_gamma가 유한하지 않습니다".into()));
        }

        let market_data = &self.market_data;
        if market_data.max_concurrency == 0 {
            return Err(CoreError::Config(
                "market_data.max_concurrency는 0보다 커야 합니다".into(),
            ));
        }
        if market_data.min_data_points < scoring.ma_window {
            return Err(CoreError::Config(format!(
                "market_data.min_data_points({})는 ma_window({}) 이상이어야 합니다",
                market_data.min_data_points, scoring.ma_window
            )));
        }
        if (market_data.history_days as usize) < market_data.min_data_points {
            return Err(CoreError::Config(format!(
                "market_data.history_days({})가 min_data_points({})보다 작습니다",
                market_data.history_days, market_data.min_data_points
            )));
        }

        if self.portfolio.tickers.iter().all(|t| t.trim().is_empty()) {
            return Err(CoreError::Config("portfolio.tickers가 비어 있습니다".into()));
        }
        if self.portfolio.default_capital <= Decimal::ZERO {
            return Err(CoreError::Config(format!(
                "portfolio.default_capital은 양수여야 합니다: {}",
                self.portfolio.default_capital
            )));
        }

        Ok(())
    }
}
