//! Shared data models spanning the engine layers.

pub mod indicators;

pub use indicators::{
    BollingerBandsIndicator, BollingerSeries, IndicatorBundle, IndicatorSnapshot, MacdIndicator,
    MacdSeries, PriceBar, PriceSeries, RsiIndicator, SmaIndicator,
};
