//! Computes the full indicator bundle for one price series.

use tracing::debug;

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::momentum::{calculate_macd, calculate_rsi};
use crate::indicators::trend::calculate_sma;
use crate::indicators::validation::validate_bars;
use crate::indicators::volatility::calculate_bollinger_bands;
use crate::models::indicators::{IndicatorBundle, PriceBar, PriceSeries};

/// Compute every indicator for `prices` under `config`.
///
/// Fails only on an invalid configuration. Short or empty input produces
/// short or empty series.
pub fn compute_bundle(
    prices: &PriceSeries,
    config: &IndicatorConfig,
) -> Result<IndicatorBundle, IndicatorError> {
    config.validate()?;

    let closes = prices.closes();
    let sma_short = calculate_sma(closes, config.sma_short);
    let sma_long = calculate_sma(closes, config.sma_long);
    let rsi = calculate_rsi(closes, config.rsi_period);
    let macd = calculate_macd(closes, config.macd_fast, config.macd_slow, config.macd_signal);
    let bollinger =
        calculate_bollinger_bands(closes, config.bollinger_period, config.bollinger_std_dev);

    debug!(
        input_len = closes.len(),
        sma_short = sma_short.len(),
        sma_long = sma_long.len(),
        rsi = rsi.len(),
        macd_line = macd.line.len(),
        macd_signal = macd.signal.len(),
        bollinger = bollinger.middle.len(),
        "Computed indicator bundle"
    );

    Ok(IndicatorBundle {
        input_len: closes.len(),
        config: *config,
        sma_short,
        sma_long,
        rsi,
        macd,
        bollinger,
    })
}

/// Validate bar ordering, extract closes and compute the bundle.
pub fn compute_bundle_from_bars(
    bars: &[PriceBar],
    config: &IndicatorConfig,
) -> Result<IndicatorBundle, IndicatorError> {
    validate_bars(bars)?;
    compute_bundle(&PriceSeries::from_bars(bars), config)
}
