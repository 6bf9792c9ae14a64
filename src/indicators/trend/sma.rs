//! SMA (Simple Moving Average) indicator

use crate::indicators::series::AlignedSeries;

/// Calculate the SMA over every full window of `period` prices.
///
/// Element `i` is the plain mean of `prices[i..i + period]`. Fewer than
/// `period` prices gives an empty series.
pub fn calculate_sma(prices: &[f64], period: u32) -> AlignedSeries {
    let period = period as usize;
    if period == 0 || prices.len() < period {
        return AlignedSeries::empty(prices.len());
    }

    let values = prices
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect();

    AlignedSeries::new(period - 1, values)
}
