//! Market data provider interface. Historical bars come from outside the
//! engine; this trait is the seam.

use std::collections::HashMap;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_bars;
use crate::models::indicators::PriceBar;

#[derive(Debug, Error)]
pub enum MarketDataError {
    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Invalid bars: {0}")]
    InvalidBars(#[from] IndicatorError),

    #[error("Malformed bar data: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[async_trait]
pub trait MarketDataProvider {
    /// Newest `limit` bars for `symbol`, oldest first.
    async fn get_bars(&self, symbol: &str, limit: usize) -> Result<Vec<PriceBar>, MarketDataError>;

    /// Symbols this provider can serve.
    async fn symbols(&self) -> Vec<String>;
}

/// Provider backed by bars loaded into memory.
#[derive(Default)]
pub struct InMemoryMarketDataProvider {
    bars: RwLock<HashMap<String, Vec<PriceBar>>>,
}

impl InMemoryMarketDataProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the history for `symbol`. Bars must be in ascending time order.
    pub async fn insert(&self, symbol: &str, bars: Vec<PriceBar>) -> Result<(), MarketDataError> {
        validate_bars(&bars)?;
        debug!(symbol = %symbol, count = bars.len(), "Stored bars");
        self.bars.write().await.insert(symbol.to_string(), bars);
        Ok(())
    }

    /// Load histories from a JSON object mapping symbol to bar array.
    pub async fn load_json(&self, json: &str) -> Result<usize, MarketDataError> {
        let histories: HashMap<String, Vec<PriceBar>> = serde_json::from_str(json)?;
        let count = histories.len();
        for (symbol, bars) in histories {
            self.insert(&symbol, bars).await?;
        }
        Ok(count)
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_bars(&self, symbol: &str, limit: usize) -> Result<Vec<PriceBar>, MarketDataError> {
        let bars = self.bars.read().await;
        let history = bars
            .get(symbol)
            .ok_or_else(|| MarketDataError::UnknownSymbol(symbol.to_string()))?;

        let start = history.len().saturating_sub(limit);
        Ok(history[start..].to_vec())
    }

    async fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.bars.read().await.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}
