//! Process and indicator configuration.

use std::collections::HashMap;
use std::env;

use serde::{Deserialize, Serialize};

use crate::indicators::error::IndicatorError;
use crate::indicators::parser::{parse_config_from_map, parse_u32, CONFIG_KEYS};
use crate::indicators::validation::validate_config;

/// Deployment environment name (`APP_ENV`), `sandbox` when unset.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Periods and multipliers for one indicator bundle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndicatorConfig {
    pub sma_short: u32,
    pub sma_long: u32,
    pub rsi_period: u32,
    pub macd_fast: u32,
    pub macd_slow: u32,
    pub macd_signal: u32,
    pub bollinger_period: u32,
    pub bollinger_std_dev: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            sma_short: 20,
            sma_long: 50,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
        }
    }
}

impl IndicatorConfig {
    pub fn validate(&self) -> Result<(), IndicatorError> {
        validate_config(self)
    }

    /// Defaults overridden by `INDICATOR_*` variables, e.g.
    /// `INDICATOR_SMA_SHORT=10` or `INDICATOR_BOLLINGER_STD_DEV=2.5`.
    pub fn from_env() -> Result<Self, IndicatorError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, IndicatorError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let overrides: HashMap<String, String> = CONFIG_KEYS
            .iter()
            .filter_map(|key| lookup(&env_var_name(key)).map(|v| (key.to_string(), v)))
            .collect();
        parse_config_from_map(&overrides, Self::default())
    }
}

/// `smaShort` -> `INDICATOR_SMA_SHORT`
fn env_var_name(key: &str) -> String {
    let mut name = String::from("INDICATOR_");
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            name.push('_');
        }
        name.push(c.to_ascii_uppercase());
    }
    name
}

/// Settings for the API server process.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Bars requested from the market data provider per computation.
    pub candle_limit: usize,
    pub indicators: IndicatorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            candle_limit: 500,
            indicators: IndicatorConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, IndicatorError> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(raw) => u16::try_from(parse_u32(&raw)?)
                .map_err(|_| IndicatorError::invalid_parameter("PORT", "out of range"))?,
            Err(_) => defaults.port,
        };

        let candle_limit = match env::var("CANDLE_LIMIT") {
            Ok(raw) => parse_u32(&raw)? as usize,
            Err(_) => defaults.candle_limit,
        };

        Ok(Self {
            port,
            candle_limit,
            indicators: IndicatorConfig::from_env()?,
        })
    }
}
