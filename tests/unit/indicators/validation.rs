//! Unit tests for configuration and bar validation

use chrono::{Duration, TimeZone, Utc};
use indicator_engine::config::IndicatorConfig;
use indicator_engine::indicators::validation::{
    validate_bars, validate_config, validate_period, validate_std_dev_multiplier,
};
use indicator_engine::indicators::IndicatorError;
use indicator_engine::models::indicators::PriceBar;

fn bar_at(day_offset: i64) -> PriceBar {
    let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap() + Duration::days(day_offset);
    PriceBar::new(10.0, 11.0, 9.0, 10.5, 100.0, ts)
}

#[test]
fn test_default_config_is_valid() {
    assert!(validate_config(&IndicatorConfig::default()).is_ok());
}

#[test]
fn test_zero_period_rejected() {
    assert!(validate_period("smaShort", 1).is_ok());
    assert_eq!(
        validate_period("smaShort", 0),
        Err(IndicatorError::InvalidParameter {
            name: "smaShort".to_string(),
            reason: "period must be at least 1".to_string(),
        })
    );
}

#[test]
fn test_std_dev_multiplier_must_be_finite_and_positive() {
    assert!(validate_std_dev_multiplier("bollingerStdDev", 2.0).is_ok());
    assert!(validate_std_dev_multiplier("bollingerStdDev", 0.01).is_ok());
    assert!(validate_std_dev_multiplier("bollingerStdDev", 0.0).is_err());
    assert!(validate_std_dev_multiplier("bollingerStdDev", -0.5).is_err());
    assert!(validate_std_dev_multiplier("bollingerStdDev", f64::NAN).is_err());
    assert!(validate_std_dev_multiplier("bollingerStdDev", f64::INFINITY).is_err());
}

#[test]
fn test_irregular_spacing_is_allowed() {
    // weekends and holidays leave gaps
    let bars = vec![bar_at(0), bar_at(1), bar_at(4), bar_at(5), bar_at(12)];
    assert!(validate_bars(&bars).is_ok());
    assert!(validate_bars(&[]).is_ok());
    assert!(validate_bars(&[bar_at(0)]).is_ok());
}

#[test]
fn test_duplicate_timestamp_rejected() {
    let bars = vec![bar_at(0), bar_at(1), bar_at(1)];
    assert_eq!(
        validate_bars(&bars),
        Err(IndicatorError::UnorderedBars { index: 2 })
    );
}

#[test]
fn test_descending_bars_rejected() {
    let bars = vec![bar_at(2), bar_at(1)];
    assert_eq!(
        validate_bars(&bars),
        Err(IndicatorError::UnorderedBars { index: 1 })
    );
}
