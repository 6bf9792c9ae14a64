//! Unit tests for Bollinger Bands indicator

use indicator_engine::indicators::trend::calculate_sma;
use indicator_engine::indicators::volatility::{
    calculate_bollinger_bands, calculate_bollinger_bands_default,
};

fn wavy_prices(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
        .collect()
}

#[test]
fn test_bollinger_population_std_dev() {
    // mean 5, population variance 4
    let prices = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let bands = calculate_bollinger_bands(&prices, 8, 2.0);

    assert_eq!(bands.middle.values, vec![5.0]);
    assert_eq!(bands.upper.values, vec![9.0]);
    assert_eq!(bands.lower.values, vec![1.0]);
}

#[test]
fn test_bollinger_middle_is_sma() {
    let prices = wavy_prices(60);
    let bands = calculate_bollinger_bands(&prices, 20, 2.0);
    let sma = calculate_sma(&prices, 20);

    assert_eq!(bands.middle, sma);
    assert_eq!(bands.upper.offset, sma.offset);
    assert_eq!(bands.lower.offset, sma.offset);
    assert_eq!(bands.upper.len(), 41);
    assert_eq!(bands.lower.len(), 41);
}

#[test]
fn test_bollinger_ordering_law() {
    let mut prices = vec![0.1; 25];
    prices.extend(wavy_prices(40));
    let period = 20usize;
    let bands = calculate_bollinger_bands(&prices, period as u32, 2.0);

    for i in 0..bands.middle.len() {
        let (upper, middle, lower) = (
            bands.upper.values[i],
            bands.middle.values[i],
            bands.lower.values[i],
        );
        let window = &prices[i..i + period];
        let constant = window.iter().all(|&v| v == window[0]);

        if constant {
            assert_eq!(upper, middle, "window {}", i);
            assert_eq!(middle, lower, "window {}", i);
        } else {
            assert!(upper > middle, "window {}", i);
            assert!(middle > lower, "window {}", i);
        }
    }
}

#[test]
fn test_bollinger_tiny_deviation_still_separates_bands() {
    // sigma is a fraction of an ulp of the mean
    let mut prices = vec![1.0; 19];
    prices.push(1.0 + f64::EPSILON);
    let bands = calculate_bollinger_bands(&prices, 20, 2.0);

    assert_eq!(bands.middle.len(), 1);
    let middle = bands.middle.values[0];
    assert!(bands.upper.values[0] > middle);
    assert!(bands.lower.values[0] < middle);
}

#[test]
fn test_bollinger_zero_multiplier_collapses_bands() {
    let bands = calculate_bollinger_bands(&wavy_prices(30), 10, 0.0);
    assert_eq!(bands.upper.values, bands.middle.values);
    assert_eq!(bands.lower.values, bands.middle.values);
}

#[test]
fn test_bollinger_insufficient_data() {
    let bands = calculate_bollinger_bands(&wavy_prices(10), 20, 2.0);
    assert!(bands.upper.is_empty());
    assert!(bands.middle.is_empty());
    assert!(bands.lower.is_empty());
}

#[test]
fn test_bollinger_default_parameters() {
    let prices = wavy_prices(45);
    assert_eq!(
        calculate_bollinger_bands_default(&prices),
        calculate_bollinger_bands(&prices, 20, 2.0)
    );
}
