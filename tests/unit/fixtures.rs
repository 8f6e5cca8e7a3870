//! Shared bar builders for unit tests

#![allow(dead_code)]

use bistrix::models::price::{PriceBar, PriceSeries};
use chrono::{DateTime, Duration, TimeZone, Utc};

pub fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

pub fn day(i: usize) -> DateTime<Utc> {
    start() + Duration::days(i as i64)
}

/// Bars with high/low one unit around the close and constant volume.
pub fn bars_from_closes(closes: &[f64]) -> Vec<PriceBar> {
    let volumes = vec![1_000.0; closes.len()];
    bars_with_volumes(closes, &volumes)
}

pub fn bars_with_volumes(closes: &[f64], volumes: &[f64]) -> Vec<PriceBar> {
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            PriceBar::new(day(i), close, close + 1.0, close - 1.0, close, volume)
        })
        .collect()
}

pub fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(bars_from_closes(closes)).unwrap()
}

/// Oscillating closes around 100.
pub fn wave_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + 10.0 * (i as f64 / 5.0).sin() + 0.1 * i as f64)
        .collect()
}

/// Bars where high == low == close for every bar.
pub fn flat_bars(count: usize, price: f64) -> Vec<PriceBar> {
    (0..count)
        .map(|i| PriceBar::new(day(i), price, price, price, price, 1_000.0))
        .collect()
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
