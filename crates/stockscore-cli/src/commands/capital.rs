//! 월 투자 자본 입력.
//!
//! `--capital` 인자가 없으면 stdin으로 입력받고, 잘못된 값이면
//! 에러 로그를 남긴 뒤 설정의 기본 자본으로 대체합니다.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use tracing::{debug, error};

/// 자본 금액 문자열을 파싱합니다.
///
/// 앞뒤 공백과 천 단위 구분자(`,`)는 무시합니다. `1e3` 같은 지수 표기도
/// 받습니다. 0 이하는 거부합니다.
pub fn parse_capital(input: &str) -> Result<Decimal> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let capital = Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .with_context(|| format!("Invalid capital amount: {:?}", input.trim()))?;

    if capital <= Decimal::ZERO {
        bail!("Capital must be positive: {}", capital);
    }
    Ok(capital)
}

/// 실행에 사용할 자본을 결정합니다.
///
/// 1. `arg`가 있으면 그 값을 파싱
/// 2. 없으면 `output`에 프롬프트를 출력하고 `input`에서 한 줄 읽음
/// 3. 빈 입력은 기본값, 파싱 실패/0 이하는 에러 로그 후 기본값
pub fn resolve_capital<R, W>(
    arg: Option<&str>,
    default: Decimal,
    input: &mut R,
    output: &mut W,
) -> Decimal
where
    R: BufRead,
    W: Write,
{
    let raw = match arg {
        Some(value) => value.to_string(),
        None => match prompt(default, input, output) {
            Ok(line) => line,
            Err(e) => {
                error!(error = %e, default = %default, "자본 입력을 읽지 못했습니다, 기본값 사용");
                return default;
            }
        },
    };

    if arg.is_none() && raw.trim().is_empty() {
        debug!(default = %default, "입력 없음, 기본 자본 사용");
        return default;
    }

    match parse_capital(&raw) {
        Ok(capital) => capital,
        Err(e) => {
            error!(input = %raw.trim(), error = %e, default = %default, "잘못된 자본 입력, 기본값 사용");
            default
        }
    }
}

fn prompt<R: BufRead, W: Write>(default: Decimal, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "월 투자 금액을 입력하세요 (기본값 {}): ", default)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line).context("Failed to read capital from stdin")?;
    Ok(line)
}
