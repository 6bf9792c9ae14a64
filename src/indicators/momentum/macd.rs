//! MACD (Moving Average Convergence Divergence) indicator

use crate::indicators::trend::calculate_ema;
use crate::models::indicators::MacdSeries;

pub const DEFAULT_MACD_FAST: u32 = 12;
pub const DEFAULT_MACD_SLOW: u32 = 26;
pub const DEFAULT_MACD_SIGNAL: u32 = 9;

/// Calculate the MACD line, signal line and histogram.
///
/// MACD      = EMA(fast) - EMA(slow)
/// Signal    = EMA(signal) of MACD
/// Histogram = MACD - Signal
///
/// The two EMAs differ in length; they are paired by their newest values and
/// the longer one's prefix is dropped. The signal EMA runs over the MACD values
/// alone, so it is rebased onto the MACD line's offset before the histogram
/// pairs them the same way. Every output is indexed against `prices`.
pub fn calculate_macd(
    prices: &[f64],
    fast_period: u32,
    slow_period: u32,
    signal_period: u32,
) -> MacdSeries {
    let ema_fast = calculate_ema(prices, fast_period);
    let ema_slow = calculate_ema(prices, slow_period);

    let line = ema_fast.zip_tail(&ema_slow, |fast, slow| fast - slow);
    let signal = calculate_ema(line.values(), signal_period).rebase(line.offset);
    let histogram = line.zip_tail(&signal, |macd, signal| macd - signal);

    MacdSeries {
        line,
        signal,
        histogram,
    }
}

/// Calculate MACD with default periods (12, 26, 9)
pub fn calculate_macd_default(prices: &[f64]) -> MacdSeries {
    calculate_macd(
        prices,
        DEFAULT_MACD_FAST,
        DEFAULT_MACD_SLOW,
        DEFAULT_MACD_SIGNAL,
    )
}
