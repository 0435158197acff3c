//! 스코어/배분 불변식 속성 테스트
//!
//! 비정상 입력(NaN, 무한대, 0, 음수 가격)에서도 검증된 결과가 항상
//! 허용 범위 안에 있는지 확인합니다.

use proptest::prelude::*;
use rust_decimal::Decimal;
use stockscore_analytics::{allocate, score_series, validate};
use stockscore_core::{ScoreResult, ScoringConfig};

fn assert_in_range(result: &ScoreResult) {
    assert!((0.0..=1.0).contains(&result.flatness), "flatness {}", result.flatness);
    assert!((0.0..=1.0).contains(&result.proximity), "proximity {}", result.proximity);
    assert!(result.bonus >= 1.0, "bonus {}", result.bonus);
    assert!(result.score.is_finite(), "score {}", result.score);
    assert!(result.score >= 0.0, "score {}", result.score);
}

fn adversarial_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.01f64..10_000.0,
        1 => Just(0.0),
        1 => -1_000.0f64..0.0,
        1 => proptest::num::f64::ANY,
    ]
}

fn adversarial_record() -> impl Strategy<Value = ScoreResult> {
    (
        proptest::option::of(adversarial_f64()),
        proptest::option::of(adversarial_f64()),
        proptest::num::f64::ANY,
        proptest::num::f64::ANY,
        proptest::num::f64::ANY,
        proptest::num::f64::ANY,
    )
        .prop_map(|(price, ma, flatness, proximity, bonus, score)| ScoreResult {
            ticker: "LKQ".to_string(),
            company: "LKQ".to_string(),
            current_price: price,
            ma50: ma,
            distance_pct: 0.0,
            flatness,
            proximity,
            bonus,
            score,
        })
}

proptest! {
    #[test]
    fn validated_records_are_in_range(record in adversarial_record()) {
        let validated = validate(record.clone());

        assert_in_range(&validated);
        prop_assert_eq!(validated.current_price.map(f64::to_bits), record.current_price.map(f64::to_bits));
        prop_assert_eq!(validated.ma50.map(f64::to_bits), record.ma50.map(f64::to_bits));
        if !validated.has_valid_prices() {
            prop_assert_eq!(validated.score, 0.0);
        }
    }

    #[test]
    fn scored_series_are_in_range(closes in proptest::collection::vec(adversarial_f64(), 50..90)) {
        let result = score_series("UPS", "UPS", &closes, &ScoringConfig::default(), 50);

        let result = result.expect("50개 이상이면 항상 계산됨");
        assert_in_range(&result);
    }

    #[test]
    fn positive_series_score_is_deterministic(closes in proptest::collection::vec(1.0f64..500.0, 50..90)) {
        let config = ScoringConfig::default();
        let first = score_series("GPC", "GPC", &closes, &config, 50).unwrap();
        let second = score_series("GPC", "GPC", &closes, &config, 50).unwrap();

        prop_assert_eq!(first.score.to_bits(), second.score.to_bits());
        prop_assert!(first.current_price.is_some() && first.ma50.is_some());
    }

    #[test]
    fn allocation_fractions_sum_to_one(scores in proptest::collection::vec(0.0f64..5.0, 1..12)) {
        let results: Vec<ScoreResult> = scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut result = ScoreResult::fallback(format!("T{i}"));
                result.current_price = Some(10.0);
                result.ma50 = Some(10.0);
                result.score = score;
                result
            })
            .collect();
        let capital = Decimal::new(3000, 0);

        let allocations = allocate(&results, capital);
        let positive = scores.iter().filter(|&&s| s > 0.0).count();
        prop_assert_eq!(allocations.len(), positive);

        if !allocations.is_empty() {
            let pct_sum: f64 = allocations.iter().map(|a| a.allocation_pct).sum();
            prop_assert!((pct_sum - 1.0).abs() < 1e-9);

            let amount_sum: Decimal = allocations.iter().map(|a| a.allocation_amount).sum();
            let tolerance = Decimal::new(1, 2) * Decimal::from(allocations.len());
            prop_assert!((amount_sum - capital).abs() <= tolerance);
            for allocation in &allocations {
                prop_assert!(allocation.allocation_pct > 0.0 && allocation.allocation_pct <= 1.0);
                prop_assert!(allocation.allocation_amount >= Decimal::ZERO);
            }
        }
    }
}
