//! 분석 명령 흐름 테스트
//!
//! 네트워크 대신 인메모리 Provider로 스코어링 → 배분 → 출력까지 확인합니다.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, TimeZone};
use rust_decimal_macros::dec;
use stockscore_cli::commands::analyze::{run_with_provider, AnalyzeConfig};
use stockscore_cli::commands::report::{render, OutputFormat, NO_SIGNAL_MESSAGE};
use stockscore_core::AppConfig;
use stockscore_data::{DailyClose, InMemoryMarketData};

fn daily(prices: &[f64]) -> Vec<DailyClose> {
    let start = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    prices
        .iter()
        .enumerate()
        .map(|(i, &close)| DailyClose::new(start + Duration::days(i as i64), close))
        .collect()
}

fn analyze_config(tickers: &[&str], format: OutputFormat) -> AnalyzeConfig {
    AnalyzeConfig {
        tickers: tickers.iter().map(|s| s.to_string()).collect(),
        capital: dec!(3000),
        format,
        show_progress: false,
    }
}

#[tokio::test]
async fn table_lists_only_positive_scores() {
    let mut dipped = vec![80.0; 59];
    dipped.push(78.0);
    let provider = InMemoryMarketData::new()
        .with_ticker("UPS", Some("United Parcel Service, Inc."), daily(&[130.0; 60]))
        .with_ticker("GPC", Some("Genuine Parts Company"), daily(&dipped))
        .with_history_failure("LEG", "no data");
    let config = analyze_config(&["UPS", "GPC", "LEG"], OutputFormat::Table);

    let report = run_with_provider(&AppConfig::default(), &config, Arc::new(provider)).await;
    let output = render(&report, config.format, Local::now()).unwrap();

    assert_eq!(report.results.len(), 3);
    assert_eq!(report.allocations.len(), 2);
    assert!(output.contains("United Parcel Service, Inc."));
    assert!(output.contains("Genuine Parts Company"));
    assert!(!output.contains("LEG"));
    assert!(output.find("United Parcel Service").unwrap() < output.find("Genuine Parts").unwrap());
    assert!(output.contains("분석 시각"));
}

#[tokio::test]
async fn all_failures_print_no_signal() {
    let provider = InMemoryMarketData::new().with_ticker("MAN", Some("ManpowerGroup"), daily(&[60.0; 12]));
    let config = analyze_config(&["MAN", "LKQ"], OutputFormat::Table);

    let report = run_with_provider(&AppConfig::default(), &config, Arc::new(provider)).await;
    let output = render(&report, config.format, Local::now()).unwrap();

    assert!(!report.has_signal());
    assert!(report.allocations.is_empty());
    assert!(output.starts_with(NO_SIGNAL_MESSAGE));
}

#[tokio::test]
async fn json_output_contains_every_ticker() {
    let provider = InMemoryMarketData::new()
        .with_ticker("KDP", Some("Keurig Dr Pepper Inc."), daily(&[33.0; 60]))
        .with_name_failure("KDP", "quote summary unavailable");
    let config = analyze_config(&["KDP", "LDOS"], OutputFormat::Json);
    let generated_at = Local.with_ymd_and_hms(2024, 7, 1, 18, 0, 0).unwrap();

    let report = run_with_provider(&AppConfig::default(), &config, Arc::new(provider)).await;
    let output = render(&report, config.format, generated_at).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["results"][0]["Ticker"], "KDP");
    assert_eq!(value["results"][0]["Company"], "KDP");
    assert_eq!(value["results"][0]["Score"], 1.0);
    assert_eq!(value["results"][1]["Ticker"], "LDOS");
    assert_eq!(value["results"][1]["Score"], 0.0);
    assert_eq!(value["allocations"][0]["AllocationAmount"], "3000.00");
}
