//! StockScore CLI.
//!
//! 50일 이동평균이 평탄하고 현재가가 그 근처(특히 약간 아래)에 있는 종목에
//! 높은 점수를 주고, 점수에 비례해 월 투자 자본을 배분합니다.
//!
//! # 사용 예시
//!
//! ```bash
//! # 기본 종목 목록, 자본은 입력 프롬프트로
//! stockscore
//!
//! # 자본과 종목 지정
//! stockscore --capital 5000 --tickers UPS,GPC,KDP
//!
//! # JSON 출력, 디버그 로그
//! stockscore --capital 3000 --format json --log-level debug
//! ```

use std::io::IsTerminal;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use stockscore_cli::commands::analyze::{parse_tickers, run_analyze, AnalyzeConfig};
use stockscore_cli::commands::capital::resolve_capital;
use stockscore_cli::commands::report::OutputFormat;
use stockscore_core::{
    init_logging, AppConfig, CoreError, LogConfig, LogFormat, DEFAULT_CONFIG_PATH,
};

#[derive(Parser)]
#[command(name = "stockscore")]
#[command(about = "MA50 근접도 기반 종목 스코어링 및 자본 배분", long_about = None)]
#[command(version)]
struct Cli {
    /// 월 투자 자본 (미지정 시 입력 프롬프트)
    #[arg(short, long)]
    capital: Option<String>,

    /// 분석할 종목 (쉼표로 구분, 예: UPS,GPC,KDP)
    #[arg(short, long)]
    tickers: Option<String>,

    /// 설정 파일 경로 (없으면 기본값 사용)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// 로그 레벨 (예: error, info, stockscore_analytics=debug)
    #[arg(long)]
    log_level: Option<String>,

    /// 로그 형식 (pretty, json, compact)
    #[arg(long)]
    log_format: Option<String>,

    /// 출력 형식 (table, json)
    #[arg(short, long, default_value = "table")]
    format: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    let log_format: LogFormat = cli
        .log_format
        .as_deref()
        .unwrap_or(app_config.logging.format.as_str())
        .parse()
        .map_err(|e: String| anyhow!(e))?;
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| app_config.logging.level.clone());
    init_logging(LogConfig::new(log_level).with_format(log_format))
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    let format = OutputFormat::parse(&cli.format)?;

    let tickers = match cli.tickers.as_deref() {
        Some(list) => parse_tickers(list),
        None => app_config.portfolio.tickers.clone(),
    };
    if tickers.is_empty() {
        return Err(CoreError::InvalidInput("분석할 종목이 없습니다".to_string()).into());
    }

    let capital = resolve_capital(
        cli.capital.as_deref(),
        app_config.portfolio.default_capital,
        &mut std::io::stdin().lock(),
        &mut std::io::stdout(),
    );

    let config = AnalyzeConfig {
        tickers,
        capital,
        format,
        show_progress: std::io::stderr().is_terminal(),
    };

    run_analyze(&app_config, config).await
}
