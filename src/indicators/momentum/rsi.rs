//! RSI (Relative Strength Index) indicator

use crate::indicators::series::AlignedSeries;

pub const DEFAULT_RSI_PERIOD: u32 = 14;

/// Calculate the RSI series.
///
/// RSI = 100 - (100 / (1 + RS))
/// RS  = Average Gain / Average Loss
///
/// Averages are plain means over `period` consecutive price changes, with no
/// Wilder smoothing. Windows are anchored at the newest change, so the oldest
/// change never enters a window and the output holds `len - period - 1`
/// values. A window without losses reads exactly 100.
///
/// Implementations that drop the newest change instead (windows over
/// `gains[i - period..i]`) produce values shifted by one step from these.
pub fn calculate_rsi(prices: &[f64], period: u32) -> AlignedSeries {
    let n = prices.len();
    let period = period as usize;
    if period == 0 || n < period + 2 {
        return AlignedSeries::empty(n);
    }

    let mut gains = Vec::with_capacity(n - 2);
    let mut losses = Vec::with_capacity(n - 2);
    for pair in prices[1..].windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let values = gains
        .windows(period)
        .zip(losses.windows(period))
        .map(|(gain_window, loss_window)| {
            let avg_gain = gain_window.iter().sum::<f64>() / period as f64;
            let avg_loss = loss_window.iter().sum::<f64>() / period as f64;
            rsi_from_averages(avg_gain, avg_loss)
        })
        .collect();

    AlignedSeries::new(period + 1, values)
}

/// Calculate RSI with default period (14)
pub fn calculate_rsi_default(prices: &[f64]) -> AlignedSeries {
    calculate_rsi(prices, DEFAULT_RSI_PERIOD)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
