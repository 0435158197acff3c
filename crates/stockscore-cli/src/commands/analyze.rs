//! 분석 명령: 스코어링 → 자본 배분 → 결과 출력.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};
use rust_decimal::Decimal;
use stockscore_analytics::{analyze, AnalysisReport, MovingAverageScorer};
use stockscore_core::AppConfig;
use stockscore_data::{MarketDataProvider, YahooMarketData};
use tracing::info;

use super::report::{render, OutputFormat};

/// 분석 실행 설정.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    /// 분석할 티커 목록
    pub tickers: Vec<String>,
    /// 배분할 자본
    pub capital: Decimal,
    /// 출력 형식
    pub format: OutputFormat,
    /// 스피너 표시 여부
    pub show_progress: bool,
}

/// 쉼표로 구분된 티커 목록을 파싱합니다.
///
/// 공백과 빈 항목은 버리고 대문자로 정규화합니다.
pub fn parse_tickers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Yahoo Finance로 분석을 실행하고 결과를 stdout에 출력합니다.
pub async fn run_analyze(app_config: &AppConfig, config: AnalyzeConfig) -> Result<()> {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(
        YahooMarketData::with_pool_size(app_config.market_data.max_concurrency)
            .context("Failed to create Yahoo Finance client")?,
    );

    let report = run_with_provider(app_config, &config, provider).await;

    let output = render(&report, config.format, Local::now())?;
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .context("Failed to write report")?;
    stdout.flush()?;

    Ok(())
}

/// 주어진 Provider로 분석을 실행합니다.
pub async fn run_with_provider(
    app_config: &AppConfig,
    config: &AnalyzeConfig,
    provider: Arc<dyn MarketDataProvider>,
) -> AnalysisReport {
    let scorer = MovingAverageScorer::new(provider, app_config.scoring, app_config.market_data);

    info!(
        tickers = config.tickers.len(),
        capital = %config.capital,
        concurrency = app_config.market_data.max_concurrency,
        "분석 시작"
    );

    let spinner = config.show_progress.then(|| spinner(config.tickers.len()));

    let report = analyze(
        &scorer,
        &config.tickers,
        config.capital,
        app_config.market_data.max_concurrency,
    )
    .await;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    report
}

fn spinner(tickers: usize) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("{}개 종목 분석 중...", tickers));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
