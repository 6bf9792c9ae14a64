//! Bollinger Bands indicator

use crate::indicators::series::AlignedSeries;
use crate::indicators::trend::calculate_sma;
use crate::models::indicators::BollingerSeries;

pub const DEFAULT_BOLLINGER_PERIOD: u32 = 20;
pub const DEFAULT_BOLLINGER_STD_DEV: f64 = 2.0;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band  = Middle + (std_dev * standard deviation)
/// Lower Band  = Middle - (std_dev * standard deviation)
///
/// The deviation is the population one (divide by `period`). All three bands
/// share the SMA's offset and length.
///
/// Bands are equal to the middle only over a constant window. When the
/// deviation is too small to move `middle` by a full ulp, the bands are set
/// to the neighbouring representable values instead.
pub fn calculate_bollinger_bands(prices: &[f64], period: u32, std_dev: f64) -> BollingerSeries {
    let middle = calculate_sma(prices, period);
    let window = period as usize;

    let deviations: Vec<f64> = if middle.is_empty() {
        Vec::new()
    } else {
        prices
            .windows(window)
            .zip(middle.values())
            .map(|(w, &mean)| population_std_dev(w, mean))
            .collect()
    };

    let band = |widen: fn(f64, f64) -> f64| {
        let values = middle
            .values()
            .iter()
            .zip(&deviations)
            .map(|(&mid, &sigma)| widen(mid, std_dev * sigma))
            .collect();
        AlignedSeries::new(middle.offset, values)
    };

    BollingerSeries {
        upper: band(upper_band),
        lower: band(lower_band),
        middle,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(prices: &[f64]) -> BollingerSeries {
    calculate_bollinger_bands(prices, DEFAULT_BOLLINGER_PERIOD, DEFAULT_BOLLINGER_STD_DEV)
}

fn upper_band(mid: f64, width: f64) -> f64 {
    let upper = mid + width;
    if width > 0.0 && upper <= mid {
        mid.next_up()
    } else {
        upper
    }
}

fn lower_band(mid: f64, width: f64) -> f64 {
    let lower = mid - width;
    if width > 0.0 && lower >= mid {
        mid.next_down()
    } else {
        lower
    }
}

fn population_std_dev(window: &[f64], mean: f64) -> f64 {
    // A constant window must collapse the bands exactly, even when the mean
    // itself picked up rounding error.
    if window.iter().all(|&v| v == window[0]) {
        return 0.0;
    }

    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / window.len() as f64;
    variance.sqrt()
}
