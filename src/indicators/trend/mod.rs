//! Trend indicators: SMA, EMA

pub mod sma;
pub mod ema;

pub use sma::*;
pub use ema::*;
