//! Unit tests for price series validation

use bistrix::indicators::error::ValidationError;
use bistrix::models::price::{PriceBar, PriceSeries, MIN_BARS};

use crate::fixtures::{bars_from_closes, day, wave_closes};

#[test]
fn test_minimum_bar_floor() {
    assert_eq!(MIN_BARS, 50);
    assert_eq!(
        PriceSeries::new(bars_from_closes(&wave_closes(49))),
        Err(ValidationError::InsufficientBars {
            required: 50,
            provided: 49
        })
    );
    assert!(PriceSeries::new(bars_from_closes(&wave_closes(50))).is_ok());
}

#[test]
fn test_duplicate_timestamp_rejected() {
    let mut bars = bars_from_closes(&wave_closes(60));
    bars[30].timestamp = bars[29].timestamp;
    assert_eq!(
        PriceSeries::new(bars),
        Err(ValidationError::DuplicateTimestamp { index: 30 })
    );
}

#[test]
fn test_out_of_order_rejected() {
    let mut bars = bars_from_closes(&wave_closes(60));
    bars[10].timestamp = day(0);
    assert!(matches!(
        PriceSeries::new(bars),
        Err(ValidationError::NonMonotonicTimestamp { index: 10 })
    ));
}

#[test]
fn test_non_positive_price_rejected() {
    let mut bars = bars_from_closes(&wave_closes(60));
    bars[5] = PriceBar::new(day(5), 100.0, 101.0, 0.0, 100.0, 1_000.0);
    assert!(matches!(
        PriceSeries::new(bars),
        Err(ValidationError::InvalidPrice { index: 5, field: "low", .. })
    ));
}

#[test]
fn test_negative_volume_rejected() {
    let mut bars = bars_from_closes(&wave_closes(60));
    bars[7].volume = -1.0;
    assert!(matches!(
        PriceSeries::new(bars),
        Err(ValidationError::InvalidVolume { index: 7, .. })
    ));
}

#[test]
fn test_last_change_ratio() {
    let mut closes = vec![100.0; 49];
    closes.push(110.0);
    let series = PriceSeries::new(bars_from_closes(&closes)).unwrap();
    assert!((series.last_change_ratio() - 0.1).abs() < 1e-12);
}
