//! Unit tests for indicator configuration parsing

use std::collections::HashMap;

use indicator_engine::config::IndicatorConfig;
use indicator_engine::indicators::parser::{parse_config_from_map, parse_f64, parse_u32};
use indicator_engine::indicators::IndicatorError;

fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_parse_numbers() {
    assert_eq!(parse_u32("14"), Ok(14));
    assert_eq!(parse_u32(" 9 "), Ok(9));
    assert_eq!(parse_f64("2.5"), Ok(2.5));
    assert_eq!(
        parse_u32("-3"),
        Err(IndicatorError::InvalidNumericFormat("-3".to_string()))
    );
    assert!(parse_f64("abc").is_err());
}

#[test]
fn test_overrides_apply_on_top_of_base() {
    let config = parse_config_from_map(
        &map(&[("smaShort", "10"), ("bollingerStdDev", "1.5"), ("unrelated", "x")]),
        IndicatorConfig::default(),
    )
    .unwrap();

    assert_eq!(config.sma_short, 10);
    assert_eq!(config.bollinger_std_dev, 1.5);
    assert_eq!(config.sma_long, 50);
    assert_eq!(config.macd_slow, 26);
}

#[test]
fn test_empty_map_returns_base() {
    let base = IndicatorConfig {
        rsi_period: 7,
        ..IndicatorConfig::default()
    };
    assert_eq!(parse_config_from_map(&HashMap::new(), base), Ok(base));
}

#[test]
fn test_malformed_value_names_the_key() {
    let result = parse_config_from_map(&map(&[("rsiPeriod", "fourteen")]), IndicatorConfig::default());
    assert_eq!(
        result,
        Err(IndicatorError::InvalidNumericFormat("rsiPeriod".to_string()))
    );
}

#[test]
fn test_parsed_config_is_validated() {
    let result = parse_config_from_map(
        &map(&[("macdFast", "26"), ("macdSlow", "12")]),
        IndicatorConfig::default(),
    );
    assert!(matches!(result, Err(IndicatorError::InvalidParameter { .. })));

    let result = parse_config_from_map(&map(&[("smaLong", "0")]), IndicatorConfig::default());
    assert!(matches!(result, Err(IndicatorError::InvalidParameter { .. })));
}
