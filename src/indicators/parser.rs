use std::collections::HashMap;

use crate::config::IndicatorConfig;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::validate_config;

/// Configuration keys as they appear in query strings and JSON bodies.
pub const CONFIG_KEYS: [&str; 8] = [
    "smaShort",
    "smaLong",
    "rsiPeriod",
    "macdFast",
    "macdSlow",
    "macdSignal",
    "bollingerPeriod",
    "bollingerStdDev",
];

pub fn parse_f64(value: &str) -> Result<f64, IndicatorError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

pub fn parse_u32(value: &str) -> Result<u32, IndicatorError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| IndicatorError::InvalidNumericFormat(value.to_string()))
}

fn field_u32(data: &HashMap<String, String>, key: &str, current: u32) -> Result<u32, IndicatorError> {
    match data.get(key) {
        Some(raw) => parse_u32(raw).map_err(|_| IndicatorError::InvalidNumericFormat(key.to_string())),
        None => Ok(current),
    }
}

/// Overlay the entries of `data` onto `base`. Unknown keys are ignored;
/// present keys must parse. The result is validated.
pub fn parse_config_from_map(
    data: &HashMap<String, String>,
    base: IndicatorConfig,
) -> Result<IndicatorConfig, IndicatorError> {
    let bollinger_std_dev = match data.get("bollingerStdDev") {
        Some(raw) => parse_f64(raw)
            .map_err(|_| IndicatorError::InvalidNumericFormat("bollingerStdDev".to_string()))?,
        None => base.bollinger_std_dev,
    };

    let config = IndicatorConfig {
        sma_short: field_u32(data, "smaShort", base.sma_short)?,
        sma_long: field_u32(data, "smaLong", base.sma_long)?,
        rsi_period: field_u32(data, "rsiPeriod", base.rsi_period)?,
        macd_fast: field_u32(data, "macdFast", base.macd_fast)?,
        macd_slow: field_u32(data, "macdSlow", base.macd_slow)?,
        macd_signal: field_u32(data, "macdSignal", base.macd_signal)?,
        bollinger_period: field_u32(data, "bollingerPeriod", base.bollinger_period)?,
        bollinger_std_dev,
    };

    validate_config(&config)?;
    Ok(config)
}

