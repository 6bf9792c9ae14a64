//! Boundary checks for indicator configuration and bar sequences.
//!
//! The transforms themselves accept any period; these checks run where a
//! request enters the engine.

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::models::indicators::PriceBar;

pub fn validate_period(name: &str, period: u32) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::invalid_parameter(name, "period must be at least 1"));
    }
    Ok(())
}

pub fn validate_std_dev_multiplier(name: &str, value: f64) -> Result<(), IndicatorError> {
    // Zero would collapse the bands over windows that vary.
    if !value.is_finite() || value <= 0.0 {
        return Err(IndicatorError::invalid_parameter(
            name,
            format!("multiplier must be finite and positive, got {}", value),
        ));
    }
    Ok(())
}

pub fn validate_config(config: &IndicatorConfig) -> Result<(), IndicatorError> {
    validate_period("smaShort", config.sma_short)?;
    validate_period("smaLong", config.sma_long)?;
    validate_period("rsiPeriod", config.rsi_period)?;
    validate_period("macdFast", config.macd_fast)?;
    validate_period("macdSlow", config.macd_slow)?;
    validate_period("macdSignal", config.macd_signal)?;
    validate_period("bollingerPeriod", config.bollinger_period)?;
    validate_std_dev_multiplier("bollingerStdDev", config.bollinger_std_dev)?;

    if config.macd_fast >= config.macd_slow {
        return Err(IndicatorError::invalid_parameter(
            "macdFast",
            format!(
                "fast period ({}) must be shorter than slow period ({})",
                config.macd_fast, config.macd_slow
            ),
        ));
    }

    Ok(())
}

/// Bars must have strictly ascending timestamps. Spacing is irrelevant.
pub fn validate_bars(bars: &[PriceBar]) -> Result<(), IndicatorError> {
    match bars
        .windows(2)
        .position(|pair| pair[1].timestamp <= pair[0].timestamp)
    {
        Some(i) => Err(IndicatorError::UnorderedBars { index: i + 1 }),
        None => Ok(()),
    }
}
