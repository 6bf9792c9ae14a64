use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::IndicatorConfig;
use crate::indicators::series::AlignedSeries;

/// One historical OHLCV bar as delivered by the market data collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl PriceBar {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Closing prices extracted from a bar sequence, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    closes: Vec<f64>,
}

impl PriceSeries {
    pub fn new(closes: Vec<f64>) -> Self {
        Self { closes }
    }

    pub fn from_bars(bars: &[PriceBar]) -> Self {
        Self {
            closes: bars.iter().map(|b| b.close).collect(),
        }
    }

    pub fn closes(&self) -> &[f64] {
        &self.closes
    }

    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(closes: Vec<f64>) -> Self {
        Self::new(closes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdSeries {
    pub line: AlignedSeries,
    pub signal: AlignedSeries,
    pub histogram: AlignedSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerSeries {
    pub upper: AlignedSeries,
    pub middle: AlignedSeries,
    pub lower: AlignedSeries,
}

/// Every indicator computed for one price series.
///
/// The short and long SMAs keep their conventional `sma20`/`sma50` names on the
/// wire even when the configured periods differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBundle {
    pub input_len: usize,
    pub config: IndicatorConfig,
    #[serde(rename = "sma20")]
    pub sma_short: AlignedSeries,
    #[serde(rename = "sma50")]
    pub sma_long: AlignedSeries,
    pub rsi: AlignedSeries,
    pub macd: MacdSeries,
    pub bollinger: BollingerSeries,
}

impl IndicatorBundle {
    /// Collapse each series to its newest value.
    pub fn latest(&self) -> IndicatorSnapshot {
        let cfg = &self.config;

        let sma = |series: &AlignedSeries, period: u32| {
            series.last().map(|value| SmaIndicator { value, period })
        };

        let macd = match (
            self.macd.line.last(),
            self.macd.signal.last(),
            self.macd.histogram.last(),
        ) {
            (Some(macd), Some(signal), Some(histogram)) => Some(MacdIndicator {
                macd,
                signal,
                histogram,
                period: Some((cfg.macd_fast, cfg.macd_slow, cfg.macd_signal)),
            }),
            _ => None,
        };

        let bollinger = match (
            self.bollinger.upper.last(),
            self.bollinger.middle.last(),
            self.bollinger.lower.last(),
        ) {
            (Some(upper), Some(middle), Some(lower)) => Some(BollingerBandsIndicator {
                upper,
                middle,
                lower,
                period: cfg.bollinger_period,
                std_dev: cfg.bollinger_std_dev,
            }),
            _ => None,
        };

        IndicatorSnapshot {
            sma_short: sma(&self.sma_short, cfg.sma_short),
            sma_long: sma(&self.sma_long, cfg.sma_long),
            rsi: self.rsi.last().map(|value| RsiIndicator {
                value,
                period: Some(cfg.rsi_period),
            }),
            macd,
            bollinger,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<(u32, u32, u32)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: u32,
    pub std_dev: f64,
}

/// Newest value of every indicator in a bundle. Absent entries mean the
/// indicator had too little data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_short: Option<SmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sma_long: Option<SmaIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<RsiIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<MacdIndicator>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger: Option<BollingerBandsIndicator>,
}
