//! Unit tests for Stochastic, Williams %R and CCI

use bistrix::indicators::momentum::{
    calculate_cci, calculate_stochastic, calculate_williams_r, FLAT_RANGE_K, FLAT_RANGE_WILLIAMS_R,
};

use crate::fixtures::{approx_eq, bars_from_closes, flat_bars, wave_closes};

#[test]
fn test_stochastic_flat_window_reads_fifty() {
    let bars = flat_bars(40, 100.0);
    let stoch = calculate_stochastic(&bars, 14, 3);

    assert_eq!(stoch.k.first_defined_index(), Some(13));
    assert_eq!(stoch.d.first_defined_index(), Some(15));
    for i in 13..bars.len() {
        assert_eq!(stoch.k.get(i), Some(FLAT_RANGE_K));
    }
    for i in 15..bars.len() {
        assert_eq!(stoch.d.get(i), Some(FLAT_RANGE_K));
    }
    assert_eq!(stoch.d.defined_count(), bars.len() - 15);
}

#[test]
fn test_stochastic_bounded() {
    let bars = bars_from_closes(&wave_closes(100));
    let stoch = calculate_stochastic(&bars, 14, 3);
    for value in stoch.k.values().iter().filter(|v| v.is_finite()) {
        assert!((0.0..=100.0).contains(value));
    }
}

#[test]
fn test_williams_r_range() {
    let bars = bars_from_closes(&wave_closes(100));
    let wr = calculate_williams_r(&bars, 14);
    assert_eq!(wr.first_defined_index(), Some(13));
    for value in wr.values().iter().filter(|v| v.is_finite()) {
        assert!((-100.0..=0.0).contains(value));
    }
}

#[test]
fn test_williams_r_flat_window() {
    let wr = calculate_williams_r(&flat_bars(20, 50.0), 14);
    assert_eq!(wr.latest(), Some(FLAT_RANGE_WILLIAMS_R));
}

#[test]
fn test_cci_flat_window_is_zero() {
    let cci = calculate_cci(&flat_bars(30, 100.0), 20);
    assert_eq!(cci.latest(), Some(0.0));
    assert_eq!(cci.first_defined_index(), Some(19));
}

#[test]
fn test_cci_formula() {
    let bars = bars_from_closes(&wave_closes(40));
    let cci = calculate_cci(&bars, 20);

    let typical: Vec<f64> = bars[20..40].iter().map(|b| b.typical_price()).collect();
    let mean = typical.iter().sum::<f64>() / 20.0;
    let mad = typical.iter().map(|t| (t - mean).abs()).sum::<f64>() / 20.0;
    let expected = (typical[19] - mean) / (0.015 * mad);
    assert!(approx_eq(cci.latest().unwrap(), expected));
}
