//! Unit tests for the in-memory market data provider

use chrono::{Duration, TimeZone, Utc};
use indicator_engine::models::indicators::PriceBar;
use indicator_engine::services::market_data::{
    InMemoryMarketDataProvider, MarketDataError, MarketDataProvider,
};

fn create_test_bars(count: usize, base_price: f64) -> Vec<PriceBar> {
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    (0..count)
        .map(|i| {
            let price = base_price + i as f64;
            PriceBar::new(
                price,
                price + 0.5,
                price - 0.5,
                price,
                1000.0,
                start + Duration::hours(i as i64),
            )
        })
        .collect()
}

#[test]
fn test_get_bars_returns_newest_in_order() {
    tokio_test::block_on(async {
        let provider = InMemoryMarketDataProvider::new();
        provider.insert("BTC", create_test_bars(10, 100.0)).await.unwrap();

        let bars = provider.get_bars("BTC", 3).await.unwrap();
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        assert_eq!(closes, vec![107.0, 108.0, 109.0]);

        let all = provider.get_bars("BTC", 500).await.unwrap();
        assert_eq!(all.len(), 10);
    });
}

#[test]
fn test_unknown_symbol() {
    tokio_test::block_on(async {
        let provider = InMemoryMarketDataProvider::new();
        let result = provider.get_bars("DOGE", 10).await;
        assert!(matches!(result, Err(MarketDataError::UnknownSymbol(ref s)) if s == "DOGE"));
    });
}

#[test]
fn test_insert_rejects_unordered_bars() {
    tokio_test::block_on(async {
        let provider = InMemoryMarketDataProvider::new();
        let mut bars = create_test_bars(5, 10.0);
        bars.reverse();

        let result = provider.insert("ETH", bars).await;
        assert!(matches!(result, Err(MarketDataError::InvalidBars(_))));
        assert!(provider.symbols().await.is_empty());
    });
}

#[test]
fn test_load_json_histories() {
    tokio_test::block_on(async {
        let provider = InMemoryMarketDataProvider::new();
        let json = serde_json::json!({
            "ETH": create_test_bars(4, 2000.0),
            "BTC": create_test_bars(6, 40000.0),
        })
        .to_string();

        assert_eq!(provider.load_json(&json).await.unwrap(), 2);
        assert_eq!(provider.symbols().await, vec!["BTC".to_string(), "ETH".to_string()]);
        assert_eq!(provider.get_bars("ETH", 100).await.unwrap().len(), 4);
    });
}

#[test]
fn test_load_json_rejects_malformed_input() {
    tokio_test::block_on(async {
        let provider = InMemoryMarketDataProvider::new();
        let result = provider.load_json("{\"BTC\": [{\"close\": 1.0}]}").await;
        assert!(matches!(result, Err(MarketDataError::Malformed(_))));
    });
}
