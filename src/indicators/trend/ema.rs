//! EMA (Exponential Moving Average) indicator

use crate::indicators::series::AlignedSeries;

/// Calculate the EMA series for `prices`.
///
/// multiplier = 2 / (period + 1)
/// EMA_t      = price_t * multiplier + EMA_{t-1} * (1 - multiplier)
///
/// The seed is the mean of the first `min(period, len)` prices and sits at
/// output index 0; the recurrence then walks `prices[period..]`. Unlike SMA, a
/// short input still yields the single seed value.
pub fn calculate_ema(prices: &[f64], period: u32) -> AlignedSeries {
    let n = prices.len();
    let period = period as usize;
    if period == 0 || n == 0 {
        return AlignedSeries::empty(n);
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let seed_len = period.min(n);
    let seed = prices[..seed_len].iter().sum::<f64>() / seed_len as f64;

    let mut values = Vec::with_capacity(n - seed_len + 1);
    values.push(seed);

    let mut prev = seed;
    for &price in &prices[seed_len..] {
        prev = price * multiplier + prev * (1.0 - multiplier);
        values.push(prev);
    }

    AlignedSeries::new(seed_len - 1, values)
}
