//! Unit tests for Bollinger Bands

use bistrix::indicators::trend::calculate_sma;
use bistrix::indicators::volatility::calculate_bollinger_bands;

use crate::fixtures::{approx_eq, bars_from_closes, flat_bars, wave_closes};

#[test]
fn test_bands_symmetric_around_sma() {
    let bars = bars_from_closes(&wave_closes(60));
    let bands = calculate_bollinger_bands(&bars, 20, 2.0);
    let sma = calculate_sma(&bars, 20);

    for i in 19..bars.len() {
        let middle = bands.middle.get(i).unwrap();
        assert!(approx_eq(middle, sma.get(i).unwrap()));
        let up = bands.upper.get(i).unwrap() - middle;
        let down = middle - bands.lower.get(i).unwrap();
        assert!(approx_eq(up, down));
        assert!(up >= 0.0);
    }
    assert!(bands.upper.get(18).is_none());
}

#[test]
fn test_population_deviation() {
    let closes = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    let bands = calculate_bollinger_bands(&bars_from_closes(&closes), 8, 1.0);
    assert!(approx_eq(bands.upper.latest().unwrap(), 7.0));
    assert!(approx_eq(bands.lower.latest().unwrap(), 3.0));
}

#[test]
fn test_flat_series_collapses_bands() {
    let bands = calculate_bollinger_bands(&flat_bars(25, 100.0), 20, 2.0);
    assert_eq!(bands.upper.latest(), Some(100.0));
    assert_eq!(bands.lower.latest(), Some(100.0));
}
