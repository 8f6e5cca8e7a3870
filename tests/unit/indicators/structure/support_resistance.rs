//! Unit tests for support/resistance levels

use bistrix::indicators::structure::{calculate_support_resistance, calculate_support_resistance_default};

use crate::fixtures::{approx_eq, bars_from_closes};

#[test]
fn test_levels_use_trailing_window_only() {
    let mut closes: Vec<f64> = vec![500.0; 10];
    closes.extend((0..20).map(|i| 100.0 + i as f64));
    let bars = bars_from_closes(&closes);

    let levels = calculate_support_resistance_default(&bars).unwrap();
    assert_eq!(levels.support, 99.0);
    assert_eq!(levels.resistance, 120.0);

    let current = 119.0;
    assert!(approx_eq(levels.support_distance_pct, (current - 99.0) / current * 100.0));
    assert!(approx_eq(levels.resistance_distance_pct, (120.0 - current) / current * 100.0));
}

#[test]
fn test_short_history_uses_all_bars() {
    let bars = bars_from_closes(&[10.0, 12.0, 11.0]);
    let levels = calculate_support_resistance(&bars, 20).unwrap();
    assert_eq!(levels.support, 9.0);
    assert_eq!(levels.resistance, 13.0);
}

#[test]
fn test_empty_input() {
    assert!(calculate_support_resistance(&[], 20).is_none());
}
