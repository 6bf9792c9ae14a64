//! Technical-indicator computation engine: SMA, EMA, RSI, MACD and Bollinger
//! Bands over historical closing prices, with an HTTP surface for callers that
//! render or report the results.

pub mod config;
pub mod core;
pub mod indicators;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod services;
