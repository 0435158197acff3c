//! Yahoo Finance 실제 호출 테스트
//!
//! 네트워크가 필요하므로 기본적으로 무시됩니다.
//! `cargo test -p stockscore-data -- --ignored` 로 실행합니다.

use stockscore_data::{MarketDataProvider, YahooMarketData};

#[tokio::test]
#[ignore]
async fn test_fetch_daily_closes_from_yahoo() {
    let provider = YahooMarketData::new().unwrap();

    let closes = provider.daily_closes("UPS", 70).await.unwrap();

    assert!(!closes.is_empty());
    assert!(closes.windows(2).all(|w| w[0].date < w[1].date));
}

#[tokio::test]
#[ignore]
async fn test_resolve_company_name_from_yahoo() {
    let provider = YahooMarketData::new().unwrap();

    let name = provider.company_name("UPS").await.unwrap();

    assert!(name.is_some());
}

#[tokio::test]
#[ignore]
async fn test_concurrent_company_names_from_yahoo() {
    let provider = YahooMarketData::with_pool_size(3).unwrap();

    let (ups, gpc, kdp) = tokio::join!(
        provider.company_name("UPS"),
        provider.company_name("GPC"),
        provider.company_name("KDP"),
    );

    assert!(ups.unwrap().is_some());
    assert!(gpc.unwrap().is_some());
    assert!(kdp.unwrap().is_some());
}
