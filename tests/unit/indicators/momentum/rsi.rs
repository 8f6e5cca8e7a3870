//! Unit tests for RSI indicator

use bistrix::indicators::momentum::calculate_rsi;

use crate::fixtures::{bars_from_closes, wave_closes};

#[test]
fn test_rsi_bounded() {
    let bars = bars_from_closes(&wave_closes(120));
    for period in [1, 2, 14, 30] {
        let rsi = calculate_rsi(&bars, period);
        assert_eq!(rsi.len(), bars.len());
        for value in rsi.values().iter().filter(|v| v.is_finite()) {
            assert!((0.0..=100.0).contains(value), "period {}: {}", period, value);
        }
    }
}

#[test]
fn test_rsi_first_defined_at_period() {
    let bars = bars_from_closes(&wave_closes(60));
    let rsi = calculate_rsi(&bars, 14);
    assert_eq!(rsi.first_defined_index(), Some(14));
}

#[test]
fn test_rsi_without_losses_is_100() {
    let closes: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
    let rsi = calculate_rsi(&bars_from_closes(&closes), 14);
    assert_eq!(rsi.latest(), Some(100.0));
}

#[test]
fn test_rsi_without_gains_is_0() {
    let closes: Vec<f64> = (0..50).map(|i| 200.0 - i as f64).collect();
    let rsi = calculate_rsi(&bars_from_closes(&closes), 14);
    assert_eq!(rsi.latest(), Some(0.0));
}

#[test]
fn test_rsi_short_series_undefined() {
    let rsi = calculate_rsi(&bars_from_closes(&wave_closes(10)), 14);
    assert_eq!(rsi.len(), 10);
    assert!(rsi.is_all_undefined());
}
