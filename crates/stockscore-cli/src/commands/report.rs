//! 분석 결과 출력 (테이블 / JSON).

use anyhow::{anyhow, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use stockscore_analytics::AnalysisReport;

/// 출력 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(anyhow!("Invalid format: {}. Use: table, json", s)),
        }
    }
}

/// 매수 신호가 없을 때의 안내 문구.
pub const NO_SIGNAL_MESSAGE: &str = "유효한 데이터나 매수 신호가 없습니다.";
/// 배분 대상이 없을 때의 안내 문구.
pub const NO_ALLOCATION_MESSAGE: &str = "양수 스코어 종목이 없습니다.";

const COMPANY_WIDTH: usize = 32;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// 분석 결과를 지정한 형식의 문자열로 만듭니다.
pub fn render(
    report: &AnalysisReport,
    format: OutputFormat,
    generated_at: DateTime<Local>,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(format_table(report, generated_at)),
        OutputFormat::Json => format_json(report, generated_at),
    }
}

/// 스코어 테이블과 배분 테이블.
///
/// 두 테이블 모두 양수 스코어 종목만 스코어 내림차순으로 보여줍니다.
pub fn format_table(report: &AnalysisReport, generated_at: DateTime<Local>) -> String {
    let mut output = String::new();

    if !report.has_signal() {
        output.push_str(NO_SIGNAL_MESSAGE);
        output.push('\n');
        output.push_str(&timestamp_line(generated_at));
        return output;
    }

    output.push_str("\n📊 MA50 근접도 스코어\n");
    output.push_str(&format!(
        "{:<width$} {:>12} {:>12} {:>10} {:>9} {:>10} {:>8} {:>8}\n",
        "Company",
        "CurrentPrice",
        "MA50",
        "Distance",
        "Flatness",
        "Proximity",
        "Bonus",
        "Score",
        width = COMPANY_WIDTH
    ));
    output.push_str(&"-".repeat(COMPANY_WIDTH + 77));
    output.push('\n');

    for result in report.ranked() {
        output.push_str(&format!(
            "{:<width$} {:>12} {:>12} {:>9.2}% {:>9.4} {:>10.4} {:>8.4} {:>8.4}\n",
            truncate(&result.company, COMPANY_WIDTH),
            format_price(result.current_price),
            format_price(result.ma50),
            result.distance_pct * 100.0,
            result.flatness,
            result.proximity,
            result.bonus,
            result.score,
            width = COMPANY_WIDTH
        ));
    }

    output.push_str(&format!("\n💰 자본 배분 (총 {})\n", report.capital));
    let allocations = report.ranked_allocations();
    if allocations.is_empty() {
        output.push_str(NO_ALLOCATION_MESSAGE);
        output.push('\n');
    } else {
        output.push_str(&format!(
            "{:<width$} {:>14} {:>18}\n",
            "Company",
            "AllocationPct",
            "AllocationAmount",
            width = COMPANY_WIDTH
        ));
        output.push_str(&"-".repeat(COMPANY_WIDTH + 34));
        output.push('\n');

        for allocation in allocations {
            output.push_str(&format!(
                "{:<width$} {:>13.2}% {:>18}\n",
                truncate(allocation.company(), COMPANY_WIDTH),
                allocation.allocation_pct * 100.0,
                allocation.allocation_amount.to_string(),
                width = COMPANY_WIDTH
            ));
        }
    }

    output.push('\n');
    output.push_str(&timestamp_line(generated_at));
    output
}

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a AnalysisReport,
    generated_at: String,
}

/// 전체 결과(입력 순서)와 배분을 JSON 문서 하나로 만듭니다.
pub fn format_json(report: &AnalysisReport, generated_at: DateTime<Local>) -> Result<String> {
    let document = JsonReport {
        report,
        generated_at: generated_at.to_rfc3339(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

fn timestamp_line(generated_at: DateTime<Local>) -> String {
    format!("분석 시각: {}\n", generated_at.format(TIMESTAMP_FORMAT))
}

fn format_price(price: Option<f64>) -> String {
    match price {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    // 문자 수로 계산 (바이트가 아님)
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
